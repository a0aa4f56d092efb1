use crate::escape::escape_html;
use crate::inline::InlineTagger;
use crate::node::{NodeId, NodeKind, Tree};

const FENCE: &str = "```";
const BULLET: &str = "* ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat end of input as a blank line and flush whatever construct is
    /// still open. When false, a construct without a following blank line
    /// or closing fence is dropped.
    pub flush_unterminated: bool,
}

/// Parse markdown text into a tree, tagging inline code spans.
pub fn parse(markdown: &str, options: &ParseOptions) -> Tree {
    parse_with_tagger(markdown, options, InlineTagger::code())
}

/// Parse markdown text into a tree using a custom inline tagger. The
/// tagger's tag is the one left unescaped in paragraphs and list items.
pub fn parse_with_tagger(markdown: &str, options: &ParseOptions, tagger: &InlineTagger) -> Tree {
    let lines: Vec<&str> = markdown.split('\n').collect();

    // The last line is a lookahead sentinel and is never classified itself,
    // unless we flush at end of input and it carries content.
    let last = lines.len() - 1;
    let count = if options.flush_unterminated && !lines[last].is_empty() {
        lines.len()
    } else {
        last
    };

    let mut state = ParseState::new(tagger);
    for (i, line) in lines.iter().take(count).enumerate() {
        state.line(line, lines.get(i + 1).copied());
    }

    if options.flush_unterminated {
        state.finish();
    } else {
        state.drop_unterminated();
    }

    state.tree
}

enum Mode {
    Default,
    InList {
        list: NodeId,
        /// Pending item text; empty once flushed
        item: String,
    },
    InCodeBlock {
        code: String,
    },
}

struct ParseState<'a> {
    tree: Tree,
    mode: Mode,
    /// Survives headings, lists and code blocks; only a blank line flushes it
    paragraph: String,
    tagger: &'a InlineTagger,
}

fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET)
}

/// A missing next line counts as blank.
fn is_blank(next: Option<&str>) -> bool {
    next.is_none_or(str::is_empty)
}

/// Number of `#` before the first space. Without a space the last
/// character is not counted, so `###` is level 2.
fn heading_level(line: &str) -> usize {
    let end = match line.find(' ') {
        Some(space) => space,
        None => line.char_indices().last().map_or(0, |(i, _)| i),
    };
    line[..end].matches('#').count()
}

impl<'a> ParseState<'a> {
    fn new(tagger: &'a InlineTagger) -> Self {
        Self {
            tree: Tree::new(),
            mode: Mode::Default,
            paragraph: String::new(),
            tagger,
        }
    }

    fn line(&mut self, line: &str, next: Option<&str>) {
        log::trace!("line {line:?}");

        if let Mode::InCodeBlock { code } = &mut self.mode {
            if is_fence(line) {
                self.mode = Mode::Default;
                return;
            }
            code.push_str(line);
            code.push('\n');
            if next.is_some_and(is_fence) {
                let text = escape_html(code, None);
                code.clear();
                self.push(NodeKind::Pre, text);
            }
            return;
        }

        if is_fence(line) {
            self.close_list();
            self.mode = Mode::InCodeBlock {
                code: String::new(),
            };
            return;
        }

        if line.starts_with('#') {
            self.close_list();
            self.heading(line);
            return;
        }

        let tagger = self.tagger;
        let line = tagger.apply(line);
        let unescape = Some(tagger.tag());

        if is_bullet(&line) {
            if matches!(self.mode, Mode::Default) {
                let root = self.tree.root();
                let list = self.tree.append(root, NodeKind::List, "");
                log::debug!("opened list");
                self.mode = Mode::InList {
                    list,
                    item: String::new(),
                };
            }
            if let Mode::InList { item, .. } = &mut self.mode {
                *item = format!(" {}", line.trim());
            }
        } else if let Mode::InList { item, .. } = &mut self.mode {
            // Continuation of the current item
            item.push(' ');
            item.push_str(line.trim());
        }

        if let Mode::InList { list, item } = &mut self.mode {
            if !item.is_empty() && (next.is_some_and(is_bullet) || is_blank(next)) {
                let text = escape_html(strip_bullet(item), unescape);
                item.clear();
                let list = *list;
                self.tree.append(list, NodeKind::ListItem, text);
                log::debug!("flushed list item");
            }
            if is_blank(next) {
                log::debug!("closed list");
                self.mode = Mode::Default;
            }
            return;
        }

        self.paragraph.push(' ');
        self.paragraph.push_str(&line);
        if is_blank(next) {
            let text = escape_html(self.paragraph.trim(), unescape);
            self.paragraph.clear();
            self.push(NodeKind::Paragraph, text);
        }
    }

    fn heading(&mut self, line: &str) {
        let level = heading_level(line);
        let start = line.char_indices().nth(level).map_or(line.len(), |(i, _)| i);
        let text = escape_html(line[start..].trim(), None);
        self.push(NodeKind::heading(level), text);
    }

    /// Flush a pending item and leave the list before a heading or fence,
    /// so a list only ever holds items.
    fn close_list(&mut self) {
        if !matches!(self.mode, Mode::InList { .. }) {
            return;
        }
        if let Mode::InList { list, item } = std::mem::replace(&mut self.mode, Mode::Default) {
            if !item.is_empty() {
                let text = escape_html(strip_bullet(&item), Some(self.tagger.tag()));
                self.tree.append(list, NodeKind::ListItem, text);
            }
            log::debug!("closed list early");
        }
    }

    /// End of input with flushing enabled.
    fn finish(&mut self) {
        if let Mode::InCodeBlock { code } = &self.mode {
            if !code.is_empty() {
                let text = escape_html(code, None);
                self.push(NodeKind::Pre, text);
            }
            self.mode = Mode::Default;
        }
        self.close_list();

        let paragraph = std::mem::take(&mut self.paragraph);
        let trimmed = paragraph.trim();
        if !trimmed.is_empty() {
            let text = escape_html(trimmed, Some(self.tagger.tag()));
            self.push(NodeKind::Paragraph, text);
        }
    }

    /// End of input without flushing.
    fn drop_unterminated(&self) {
        let dropped = !self.paragraph.trim().is_empty()
            || match &self.mode {
                Mode::Default => false,
                Mode::InList { item, .. } => !item.is_empty(),
                Mode::InCodeBlock { code } => !code.is_empty(),
            };
        if dropped {
            log::debug!("dropped unterminated construct at end of input");
        }
    }

    /// Append a node to root.
    fn push(&mut self, kind: NodeKind, text: String) {
        log::debug!("flushed {:?}", kind);
        let root = self.tree.root();
        self.tree.append(root, kind, text);
    }
}

/// Item text without the leading space and `*` marker.
fn strip_bullet(item: &str) -> &str {
    let item = item.trim_start();
    item.strip_prefix('*').unwrap_or(item).trim()
}
