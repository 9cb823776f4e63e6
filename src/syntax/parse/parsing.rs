use log::trace;

use crate::syntax::errors::Diagnostics;
use crate::syntax::grammar::keywords;
use crate::syntax::green::{Kind, Node};
use crate::syntax::lex::Token;
use crate::syntax::source::{Location, Span};
use crate::syntax::table::{Action, Table};

/// Tokens to shift after an error before new errors are reported again.
const RECOVERY_TOKENS: usize = 3;

pub fn parse<'src>(
    table: &'static Table,
    tokens: impl Iterator<Item = Token<'src>>,
    diagnostics: &mut Diagnostics,
) -> Node {
    let mut parser = Parser {
        table,
        tokens,
        diagnostics,
        states: vec![0],
        frames: vec![Vec::new()],
        pending: Vec::new(),
        open: Vec::new(),
        recovering: 0,
        end: Location::START,
    };

    let root = parser.run();
    debug_assert!(parser.pending.is_empty());
    root
}

/// The token the parser is deciding on.
#[derive(Clone, Copy, Debug)]
struct Lookahead<'src> {
    kind: Kind,
    /// The keyword this identifier spells, if any, even when it was not
    /// accepted as one.
    keyword: Option<Kind>,
    text: &'src str,
    span: Span,
}

struct Parser<'a, I> {
    table: &'static Table,
    tokens: I,
    diagnostics: &'a mut Diagnostics,

    /// The LR state stack. `frames[i]` holds the nodes of the symbol that
    /// led to `states[i]`; the bottom frame is always empty.
    states: Vec<usize>,
    frames: Vec<Vec<Node>>,

    /// Trivia, invalid tokens and recovered subtrees not yet attached to a
    /// token.
    pending: Vec<Node>,

    /// Opening delimiters that have been shifted but not closed, with the
    /// stack height they were shifted at.
    open: Vec<(Kind, Span, usize)>,

    recovering: usize,
    end: Location,
}

impl<'src, I> Parser<'_, I>
where
    I: Iterator<Item = Token<'src>>,
{
    fn run(&mut self) -> Node {
        let mut lookahead = self.advance();

        loop {
            let state = *self.states.last().expect("the state stack is never empty");
            match self.table.action(state, lookahead.kind) {
                Some(Action::Shift(target)) => {
                    self.shift(target, &lookahead);
                    lookahead = self.advance();
                }

                Some(Action::Reduce(rule)) => self.reduce(rule),

                Some(Action::Accept) => return self.accept(),

                None => match self.recover(lookahead) {
                    Some(synced) => lookahead = synced,
                    None => return self.abandon(),
                },
            }
        }
    }

    /// Read the next significant token, collecting anything else into the
    /// pending buffer.
    fn advance(&mut self) -> Lookahead<'src> {
        loop {
            let Some(token) = self.tokens.next() else {
                return Lookahead {
                    kind: Kind::Eof,
                    keyword: None,
                    text: "",
                    span: Span::empty(self.end),
                };
            };

            self.end = token.span.end;

            if let Some(cause) = token.error {
                self.diagnostics
                    .lex_error(token.span)
                    .invalid_token(cause, token.text);

                // Whatever the grammar trips over next is this token's fault.
                self.recovering = RECOVERY_TOKENS;
            }

            let significant = match token.kind {
                kind if kind.is_skipped() => false,
                Kind::Error => self.table.accepts(&self.states, Kind::Error),
                _ => true,
            };

            if !significant {
                self.pending.push(Node::token(token.kind, token.text));
                continue;
            }

            let keyword = match token.kind {
                Kind::Ident => keywords::resolve(self.table.grammar().keywords(), token.text),
                _ => None,
            };

            let kind = match keyword {
                Some(keyword) if self.table.accepts(&self.states, keyword) => keyword,
                _ => token.kind,
            };

            return Lookahead {
                kind,
                keyword,
                text: token.text,
                span: token.span,
            };
        }
    }

    fn shift(&mut self, target: usize, lookahead: &Lookahead<'src>) {
        let mut frame: Vec<Node> = self.pending.drain(..).collect();
        frame.push(Node::token(lookahead.kind, lookahead.text));

        self.states.push(target);
        self.frames.push(frame);
        self.recovering = self.recovering.saturating_sub(1);

        if lookahead.kind.closing().is_some() {
            self.open
                .push((lookahead.kind, lookahead.span, self.states.len()));
        } else if let Some(&(opening, _, _)) = self.open.last() {
            if opening.closing() == Some(lookahead.kind) {
                self.open.pop();
            }
        }
    }

    fn reduce(&mut self, id: usize) {
        let grammar = self.table.grammar();
        let rule = grammar.rule(id);
        let at = self.states.len() - rule.symbols.len();

        self.states.truncate(at);
        let children: Vec<Node> = self.frames.drain(at..).flatten().collect();

        let frame = match grammar.node(rule.lhs) {
            Some(kind) => wrap(kind, children),
            None => children,
        };

        let top = *self.states.last().expect("the state stack is never empty");
        let target = self
            .table
            .goto(top, rule.lhs)
            .expect("every reduction has a goto");

        self.states.push(target);
        self.frames.push(frame);
    }

    fn accept(&mut self) -> Node {
        let frame = self.frames.pop().unwrap_or_default();
        let mut children = Vec::new();

        for node in frame {
            if node.kind() == Kind::Program && !node.is_token() {
                children.extend(node.children().iter().cloned());
            } else {
                children.push(node);
            }
        }

        children.append(&mut self.pending);
        Node::node(Kind::Program, children)
    }

    /// Give up on the input: everything parsed so far goes in one error node
    /// under the root.
    fn abandon(&mut self) -> Node {
        let parsed: Vec<Node> = self.frames.drain(..).flatten().collect();
        self.states.truncate(1);

        let mut children = Vec::new();
        if !parsed.is_empty() {
            children.push(Node::node(Kind::Error, parsed));
        }

        children.append(&mut self.pending);
        Node::node(Kind::Program, children)
    }

    /// Panic mode recovery. Discard tokens until one of them is accepted by
    /// some state on the stack, then pop the stack down to that state. All
    /// popped and discarded nodes are kept in an error node.
    fn recover(&mut self, mut lookahead: Lookahead<'src>) -> Option<Lookahead<'src>> {
        let report = self.recovering == 0;
        self.recovering = RECOVERY_TOKENS;

        if let Some(kind) = self.insert_terminator(&lookahead) {
            trace!("inserted a missing `;` before {kind:?}");
            if report {
                self.diagnostics
                    .parse_error(lookahead.span)
                    .missing(Kind::Semicolon);
            }

            lookahead.kind = kind;
            return Some(lookahead);
        }

        if report {
            let expected = self.table.expected(&self.states);
            self.diagnostics.parse_error(lookahead.span).unexpected(
                lookahead.kind,
                lookahead.text,
                &expected,
            );
        }

        let mut discarded: Vec<Node> = Vec::new();

        loop {
            if let Some((depth, kind)) = self.sync_point(&lookahead) {
                trace!(
                    "recovered on {kind:?} at depth {depth} of {}",
                    self.states.len()
                );

                if lookahead.kind == Kind::Eof {
                    self.report_unclosed(depth);
                }
                self.open.retain(|(_, _, height)| *height <= depth);

                self.states.truncate(depth);
                let mut error: Vec<Node> = self.frames.drain(depth..).flatten().collect();
                error.append(&mut discarded);

                if !error.is_empty() {
                    self.pending.insert(0, Node::node(Kind::Error, error));
                }

                lookahead.kind = kind;
                return Some(lookahead);
            }

            if lookahead.kind == Kind::Eof {
                discarded.append(&mut self.pending);
                self.pending = discarded;
                return None;
            }

            discarded.append(&mut self.pending);
            discarded.push(Node::token(lookahead.kind, lookahead.text));
            lookahead = self.advance();
        }
    }

    /// The deepest stack height whose states accept the lookahead. The
    /// keyword reading of an identifier is tried first, at every height.
    fn sync_point(&self, lookahead: &Lookahead<'src>) -> Option<(usize, Kind)> {
        for kind in readings(lookahead) {
            for depth in (1..=self.states.len()).rev() {
                if self.table.accepts(&self.states[..depth], kind) {
                    return Some((depth, kind));
                }
            }
        }

        None
    }

    /// Supply a `;` missing at the end of a line (or of the input) if the
    /// lookahead can follow it. The terminator has no text, so it leaves
    /// nothing in the tree.
    fn insert_terminator(&mut self, lookahead: &Lookahead<'src>) -> Option<Kind> {
        if lookahead.kind != Kind::Eof && !self.after_line_break() {
            return None;
        }

        let after = self.table.after(&self.states, Kind::Semicolon)?;
        let kind = readings(lookahead).find(|kind| self.table.accepts(&after, *kind))?;

        loop {
            let state = *self.states.last().expect("the state stack is never empty");
            match self.table.action(state, Kind::Semicolon)? {
                Action::Shift(target) => {
                    self.states.push(target);
                    self.frames.push(Vec::new());
                    return Some(kind);
                }

                Action::Reduce(rule) => self.reduce(rule),
                Action::Accept => return None,
            }
        }
    }

    fn after_line_break(&self) -> bool {
        self.pending.iter().any(|node| {
            node.kind().is_skipped()
                && node
                    .lexeme()
                    .is_some_and(|text| text.contains(['\n', '\r']))
        })
    }

    fn report_unclosed(&mut self, depth: usize) {
        let unclosed = self
            .open
            .iter()
            .rev()
            .find(|(_, _, height)| *height > depth)
            .copied();

        if let Some((delimiter, span, _)) = unclosed {
            self.diagnostics
                .parse_error(span)
                .unclosed_delimiter(delimiter);
        }
    }
}

/// The kinds a lookahead may be read as, keyword reading first.
fn readings(lookahead: &Lookahead) -> impl Iterator<Item = Kind> {
    lookahead
        .keyword
        .into_iter()
        .chain((lookahead.keyword != Some(lookahead.kind)).then_some(lookahead.kind))
}

/// Build a node of the given kind, hoisting leading trivia and recovered
/// errors out so that the node starts at its first significant token.
fn wrap(kind: Kind, mut children: Vec<Node>) -> Vec<Node> {
    let leading = children
        .iter()
        .take_while(|node| {
            node.kind().is_skipped() || (node.kind() == Kind::Error && !node.is_token())
        })
        .count();

    let rest = children.split_off(leading);
    children.push(Node::node(kind, rest));
    children
}
