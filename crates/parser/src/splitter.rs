use crate::patterns::{SIGNAL_MARKERS, SYMBOL_SIDE_LINE, TRADER_LINE};

/// Splits on every line terminator a chat client may produce. `\r\n` counts
/// once and a final terminator does not open an empty trailing line.
pub(crate) fn lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        out.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A trigger line may open a new setup: a "trader" byline or a
/// `<TICKER> ... long|short` header.
fn is_trigger(line: &str) -> bool {
    TRADER_LINE.is_match(line) || SYMBOL_SIDE_LINE.is_match(line)
}

fn carries_signal(line: &str) -> bool {
    let lowered = line.to_lowercase();
    SIGNAL_MARKERS.iter().any(|marker| lowered.contains(marker))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    /// Nothing collected since the last flush (or since the start).
    Flushed,
    /// At least one line collected for the current block.
    Accumulating,
}

struct BlockSplitter<'a> {
    state: SplitState,
    current: Vec<&'a str>,
    blocks: Vec<Vec<&'a str>>,
}

impl<'a> BlockSplitter<'a> {
    fn new() -> Self {
        Self {
            state: SplitState::Flushed,
            current: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn push(&mut self, line: &'a str) {
        if self.state == SplitState::Accumulating && is_trigger(line) && self.ready_to_flush() {
            self.flush();
        }
        self.current.push(line);
        self.state = SplitState::Accumulating;
    }

    /// The collected block has content and at least one signal-bearing line.
    fn ready_to_flush(&self) -> bool {
        self.current.iter().any(|l| !is_blank(l)) && self.current.iter().any(|l| carries_signal(l))
    }

    fn flush(&mut self) {
        let block = std::mem::take(&mut self.current);
        if block.iter().any(|l| !is_blank(l)) {
            self.blocks.push(block);
        }
        self.state = SplitState::Flushed;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.blocks
            .into_iter()
            .map(|block| block.join("\n").trim().to_string())
            .collect()
    }
}

/// Segments a message into independent setup blocks, in input order.
/// Blank-only segments are dropped.
pub fn split_setups(text: &str) -> Vec<String> {
    let mut splitter = BlockSplitter::new();
    for line in lines(text) {
        splitter.push(line);
    }
    splitter.finish()
}

pub fn split_blocks(text: &str) -> Vec<String> {
    split_setups(text)
}
