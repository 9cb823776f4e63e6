//! Declarative grammar definitions. A grammar is a list of rules over
//! terminals (token kinds) and non-terminals, plus yacc-style precedence
//! declarations. Visible non-terminals become nodes in the tree; hidden ones
//! are spliced into their parent.

use std::collections::HashMap;

use super::green::Kind;

/// Add a rule: `rule!(g, lhs => a, b, c)`.
macro_rules! rule {
    ($g:expr, $lhs:expr => $($symbol:expr),* $(,)?) => {
        $g.rule($lhs, vec![$(Symbol::from($symbol)),*])
    };
}

pub mod current;
pub mod keywords;
pub mod legacy;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NonTerminal(u16);

impl NonTerminal {
    /// The non-terminal of the augmented start rule.
    pub const ACCEPT: NonTerminal = NonTerminal(0);

    pub fn index(&self) -> usize {
        usize::from(self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Symbol {
    Terminal(Kind),
    NonTerminal(NonTerminal),
}

impl From<Kind> for Symbol {
    fn from(kind: Kind) -> Self {
        Self::Terminal(kind)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(nt: NonTerminal) -> Self {
        Self::NonTerminal(nt)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Assoc {
    Left,
    Right,
    NonAssoc,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rule {
    pub lhs: NonTerminal,
    pub symbols: Vec<Symbol>,
    /// An explicit precedence, given as the terminal whose level to use.
    pub precedence: Option<Kind>,
}

#[derive(Clone, Debug)]
struct NonTerminalInfo {
    name: String,
    node: Option<Kind>,
}

/// A validated grammar, ready for table construction. Rule 0 is always the
/// augmented rule `accept -> start`.
#[derive(Clone, Debug)]
pub struct Grammar {
    name: &'static str,
    nonterminals: Vec<NonTerminalInfo>,
    rules: Vec<Rule>,
    by_lhs: Vec<Vec<usize>>,
    precedence: HashMap<Kind, (usize, Assoc)>,
    terminals: Vec<Kind>,
    keywords: &'static [(&'static str, Kind)],
}

impl Grammar {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, id: usize) -> &Rule {
        &self.rules[id]
    }

    /// The ids of every rule with the given left hand side.
    pub fn rules_of(&self, nt: NonTerminal) -> &[usize] {
        &self.by_lhs[nt.index()]
    }

    pub fn nonterminal_count(&self) -> usize {
        self.nonterminals.len()
    }

    pub fn nonterminal_name(&self, nt: NonTerminal) -> &str {
        &self.nonterminals[nt.index()].name
    }

    /// The node kind a non-terminal produces, or `None` if it is hidden.
    pub fn node(&self, nt: NonTerminal) -> Option<Kind> {
        self.nonterminals[nt.index()].node
    }

    /// Every terminal used by the grammar, including [`Kind::Eof`].
    pub fn terminals(&self) -> &[Kind] {
        &self.terminals
    }

    pub fn keywords(&self) -> &'static [(&'static str, Kind)] {
        self.keywords
    }

    pub fn precedence_of(&self, terminal: Kind) -> Option<(usize, Assoc)> {
        self.precedence.get(&terminal).copied()
    }

    /// The precedence of a rule is the one given explicitly, or else that of
    /// its last terminal.
    pub fn rule_precedence(&self, id: usize) -> Option<(usize, Assoc)> {
        let rule = &self.rules[id];
        let terminal = rule.precedence.or_else(|| {
            rule.symbols.iter().rev().find_map(|symbol| match symbol {
                Symbol::Terminal(kind) => Some(*kind),
                Symbol::NonTerminal(_) => None,
            })
        })?;

        self.precedence_of(terminal)
    }
}

pub struct GrammarBuilder {
    name: &'static str,
    nonterminals: Vec<NonTerminalInfo>,
    rules: Vec<Rule>,
    precedence: HashMap<Kind, (usize, Assoc)>,
    level: usize,
}

impl GrammarBuilder {
    pub fn new(name: &'static str) -> Self {
        let accept = NonTerminalInfo {
            name: "accept".into(),
            node: None,
        };

        // Placeholder for the augmented rule, filled in by `finish`.
        let augmented = Rule {
            lhs: NonTerminal::ACCEPT,
            symbols: Vec::new(),
            precedence: None,
        };

        Self {
            name,
            nonterminals: vec![accept],
            rules: vec![augmented],
            precedence: HashMap::new(),
            level: 0,
        }
    }

    /// Declare a non-terminal producing nodes of the given kind.
    pub fn node(&mut self, kind: Kind) -> NonTerminal {
        self.declare(format!("{kind:?}"), Some(kind))
    }

    /// Declare a non-terminal whose children are spliced into its parent.
    pub fn hidden(&mut self, name: &str) -> NonTerminal {
        self.declare(name.into(), None)
    }

    fn declare(&mut self, name: String, node: Option<Kind>) -> NonTerminal {
        let id = u16::try_from(self.nonterminals.len()).expect("fewer than 65536 non-terminals");
        self.nonterminals.push(NonTerminalInfo { name, node });
        NonTerminal(id)
    }

    pub fn rule(&mut self, lhs: NonTerminal, symbols: Vec<Symbol>) {
        self.rules.push(Rule {
            lhs,
            symbols,
            precedence: None,
        });
    }

    /// Add a rule with the precedence of `prec` rather than of its last
    /// terminal (`%prec` in yacc).
    pub fn rule_prec(&mut self, lhs: NonTerminal, symbols: Vec<Symbol>, prec: Kind) {
        self.rules.push(Rule {
            lhs,
            symbols,
            precedence: Some(prec),
        });
    }

    /// Declare a new, tighter binding level of left associative terminals.
    pub fn left(&mut self, terminals: &[Kind]) {
        self.level(terminals, Assoc::Left);
    }

    pub fn right(&mut self, terminals: &[Kind]) {
        self.level(terminals, Assoc::Right);
    }

    pub fn nonassoc(&mut self, terminals: &[Kind]) {
        self.level(terminals, Assoc::NonAssoc);
    }

    fn level(&mut self, terminals: &[Kind], assoc: Assoc) {
        self.level += 1;
        for terminal in terminals {
            let previous = self.precedence.insert(*terminal, (self.level, assoc));
            assert!(previous.is_none(), "{terminal:?} has two precedences");
        }
    }

    /// Validate the grammar and add the augmented start rule.
    ///
    /// # Panics
    ///
    /// Panics if a non-terminal has no rules or trivia is used as a terminal.
    /// Grammars are fixed, so this only happens while building tables for the
    /// first time.
    pub fn finish(
        mut self,
        start: NonTerminal,
        keywords: &'static [(&'static str, Kind)],
    ) -> Grammar {
        self.rules[0].symbols = vec![Symbol::NonTerminal(start)];

        let mut by_lhs = vec![Vec::new(); self.nonterminals.len()];
        for (id, rule) in self.rules.iter().enumerate() {
            by_lhs[rule.lhs.index()].push(id);
        }

        for (index, rules) in by_lhs.iter().enumerate() {
            assert!(
                !rules.is_empty(),
                "{}: non-terminal `{}` has no rules",
                self.name,
                self.nonterminals[index].name
            );
        }

        let mut terminals: Vec<Kind> = self
            .rules
            .iter()
            .flat_map(|rule| rule.symbols.iter())
            .filter_map(|symbol| match symbol {
                Symbol::Terminal(kind) => Some(*kind),
                Symbol::NonTerminal(_) => None,
            })
            .chain(std::iter::once(Kind::Eof))
            .collect();
        terminals.sort();
        terminals.dedup();

        for terminal in &terminals {
            assert!(
                !terminal.is_skipped(),
                "{}: {terminal:?} cannot be a terminal",
                self.name
            );
        }

        Grammar {
            name: self.name,
            nonterminals: self.nonterminals,
            rules: self.rules,
            by_lhs,
            precedence: self.precedence,
            terminals,
            keywords,
        }
    }
}
