//! LALR(1) construction: the LR(0) automaton, then lookaheads propagated
//! through the LR(1) closure of every state until nothing changes.

use std::collections::{HashMap, VecDeque};

use log::debug;

use super::sets::TermSet;
use super::Action;
use crate::syntax::grammar::{Assoc, Grammar, NonTerminal, Symbol};
use crate::syntax::green::Kind;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Item {
    pub rule: usize,
    pub dot: usize,
}

impl Item {
    fn next(&self, grammar: &Grammar) -> Option<Symbol> {
        grammar.rule(self.rule).symbols.get(self.dot).copied()
    }

    fn advance(self) -> Self {
        Self {
            rule: self.rule,
            dot: self.dot + 1,
        }
    }
}

/// Nullability and FIRST sets of every non-terminal.
struct Analysis {
    nullable: Vec<bool>,
    first: Vec<TermSet>,
}

impl Analysis {
    fn new(grammar: &Grammar) -> Self {
        let count = grammar.nonterminal_count();
        let mut this = Self {
            nullable: vec![false; count],
            first: vec![TermSet::new(); count],
        };

        let mut changed = true;
        while changed {
            changed = false;
            for rule in grammar.rules() {
                let lhs = rule.lhs.index();
                let mut all_nullable = true;

                for symbol in &rule.symbols {
                    match symbol {
                        Symbol::Terminal(kind) => {
                            changed |= this.first[lhs].insert(*kind);
                            all_nullable = false;
                        }

                        Symbol::NonTerminal(nt) => {
                            let first = this.first[nt.index()];
                            changed |= this.first[lhs].union(&first);
                            if !this.nullable[nt.index()] {
                                all_nullable = false;
                            }
                        }
                    }

                    if !all_nullable {
                        break;
                    }
                }

                if all_nullable && !this.nullable[lhs] {
                    this.nullable[lhs] = true;
                    changed = true;
                }
            }
        }

        this
    }

    /// FIRST of `symbols` followed by anything in `follow`.
    fn first_of(&self, symbols: &[Symbol], follow: &TermSet) -> TermSet {
        let mut set = TermSet::new();
        for symbol in symbols {
            match symbol {
                Symbol::Terminal(kind) => {
                    set.insert(*kind);
                    return set;
                }

                Symbol::NonTerminal(nt) => {
                    set.union(&self.first[nt.index()]);
                    if !self.nullable[nt.index()] {
                        return set;
                    }
                }
            }
        }

        set.union(follow);
        set
    }
}

struct State {
    kernel: Vec<Item>,
    transitions: Vec<(Symbol, usize)>,
}

impl State {
    fn target(&self, symbol: Symbol) -> Option<usize> {
        self.transitions
            .iter()
            .find_map(|(on, target)| (*on == symbol).then_some(*target))
    }
}

pub struct Built {
    pub actions: Vec<HashMap<Kind, Action>>,
    pub gotos: Vec<HashMap<NonTerminal, usize>>,
}

pub fn build(grammar: &Grammar) -> Built {
    let analysis = Analysis::new(grammar);
    let states = automaton(grammar);
    let lookaheads = lookaheads(grammar, &analysis, &states);

    let mut actions = Vec::with_capacity(states.len());
    let mut gotos = Vec::with_capacity(states.len());

    for (index, state) in states.iter().enumerate() {
        let closure = closure1(grammar, &analysis, &state.kernel, &lookaheads[index]);
        actions.push(state_actions(grammar, index, state, &closure));

        gotos.push(
            state
                .transitions
                .iter()
                .filter_map(|(symbol, target)| match symbol {
                    Symbol::NonTerminal(nt) => Some((*nt, *target)),
                    Symbol::Terminal(_) => None,
                })
                .collect(),
        );
    }

    Built { actions, gotos }
}

fn closure0(grammar: &Grammar, kernel: &[Item]) -> Vec<Item> {
    let mut items = kernel.to_vec();
    let mut expanded = vec![false; grammar.nonterminal_count()];
    let mut at = 0;

    while at < items.len() {
        if let Some(Symbol::NonTerminal(nt)) = items[at].next(grammar) {
            if !expanded[nt.index()] {
                expanded[nt.index()] = true;
                items.extend(grammar.rules_of(nt).iter().map(|&rule| Item { rule, dot: 0 }));
            }
        }

        at += 1;
    }

    items
}

fn automaton(grammar: &Grammar) -> Vec<State> {
    let start = vec![Item { rule: 0, dot: 0 }];
    let mut index: HashMap<Vec<Item>, usize> = HashMap::from([(start.clone(), 0)]);
    let mut states = vec![State {
        kernel: start,
        transitions: Vec::new(),
    }];

    let mut at = 0;
    while at < states.len() {
        // Group advanced items by the symbol they move over, in order of
        // first appearance so state numbering is deterministic.
        let mut moves: Vec<(Symbol, Vec<Item>)> = Vec::new();
        for item in closure0(grammar, &states[at].kernel) {
            let Some(symbol) = item.next(grammar) else {
                continue;
            };

            match moves.iter_mut().find(|(on, _)| *on == symbol) {
                Some((_, kernel)) => kernel.push(item.advance()),
                None => moves.push((symbol, vec![item.advance()])),
            }
        }

        let mut transitions = Vec::with_capacity(moves.len());
        for (symbol, mut kernel) in moves {
            kernel.sort();
            kernel.dedup();

            let target = match index.get(&kernel) {
                Some(&target) => target,
                None => {
                    let target = states.len();
                    index.insert(kernel.clone(), target);
                    states.push(State {
                        kernel,
                        transitions: Vec::new(),
                    });
                    target
                }
            };

            transitions.push((symbol, target));
        }

        states[at].transitions = transitions;
        at += 1;
    }

    states
}

/// The LR(1) closure of a kernel whose items carry the given lookaheads.
fn closure1(
    grammar: &Grammar,
    analysis: &Analysis,
    kernel: &[Item],
    lookaheads: &[TermSet],
) -> Vec<(Item, TermSet)> {
    let mut items: Vec<(Item, TermSet)> = kernel.iter().copied().zip(lookaheads.iter().copied()).collect();
    let mut positions: HashMap<Item, usize> = kernel
        .iter()
        .enumerate()
        .map(|(position, item)| (*item, position))
        .collect();
    let mut work: Vec<usize> = (0..items.len()).collect();

    while let Some(at) = work.pop() {
        let (item, lookahead) = items[at];
        let Some(Symbol::NonTerminal(nt)) = item.next(grammar) else {
            continue;
        };

        let rest = &grammar.rule(item.rule).symbols[item.dot + 1..];
        let follow = analysis.first_of(rest, &lookahead);

        for &rule in grammar.rules_of(nt) {
            let new = Item { rule, dot: 0 };
            match positions.get(&new) {
                Some(&position) => {
                    if items[position].1.union(&follow) {
                        work.push(position);
                    }
                }

                None => {
                    positions.insert(new, items.len());
                    work.push(items.len());
                    items.push((new, follow));
                }
            }
        }
    }

    items
}

fn lookaheads(grammar: &Grammar, analysis: &Analysis, states: &[State]) -> Vec<Vec<TermSet>> {
    let mut lookaheads: Vec<Vec<TermSet>> = states
        .iter()
        .map(|state| vec![TermSet::new(); state.kernel.len()])
        .collect();
    lookaheads[0][0].insert(Kind::Eof);

    let mut queued = vec![true; states.len()];
    let mut work: VecDeque<usize> = (0..states.len()).collect();
    let mut rounds = 0usize;

    while let Some(at) = work.pop_front() {
        queued[at] = false;
        rounds += 1;

        let closure = closure1(grammar, analysis, &states[at].kernel, &lookaheads[at]);
        for (item, lookahead) in closure {
            if lookahead.is_empty() {
                continue;
            }

            let Some(symbol) = item.next(grammar) else {
                continue;
            };

            let target = states[at]
                .target(symbol)
                .expect("every item with a next symbol has a transition");
            let position = states[target]
                .kernel
                .binary_search(&item.advance())
                .expect("advanced items are in the target kernel");

            if lookaheads[target][position].union(&lookahead) && !queued[target] {
                queued[target] = true;
                work.push_back(target);
            }
        }
    }

    debug!(
        "{}: lookaheads settled after {rounds} state visits",
        grammar.name()
    );

    lookaheads
}

fn state_actions(
    grammar: &Grammar,
    index: usize,
    state: &State,
    closure: &[(Item, TermSet)],
) -> HashMap<Kind, Action> {
    let mut shifts: HashMap<Kind, usize> = HashMap::new();
    let mut reduces: HashMap<Kind, Vec<usize>> = HashMap::new();
    let mut actions = HashMap::new();

    for (item, lookahead) in closure {
        match item.next(grammar) {
            Some(Symbol::Terminal(kind)) => {
                let target = state
                    .target(Symbol::Terminal(kind))
                    .expect("every item with a next symbol has a transition");
                shifts.insert(kind, target);
            }

            Some(Symbol::NonTerminal(_)) => {}

            None if item.rule == 0 => {
                actions.insert(Kind::Eof, Action::Accept);
            }

            None => {
                for kind in lookahead.iter(grammar.terminals()) {
                    reduces.entry(kind).or_default().push(item.rule);
                }
            }
        }
    }

    for (kind, target) in &shifts {
        if !reduces.contains_key(kind) {
            actions.insert(*kind, Action::Shift(*target));
        }
    }

    for (kind, mut rules) in reduces {
        rules.sort_unstable();
        rules.dedup();

        let rule = rules[0];
        if rules.len() > 1 {
            debug!(
                "{}: state {index}: reduce/reduce conflict on {kind:?} between rules {rules:?}, reducing {rule}",
                grammar.name()
            );
        }

        let Some(&target) = shifts.get(&kind) else {
            actions.insert(kind, Action::Reduce(rule));
            continue;
        };

        match (grammar.precedence_of(kind), grammar.rule_precedence(rule)) {
            (Some((token, assoc)), Some((level, _))) => {
                if token > level {
                    actions.insert(kind, Action::Shift(target));
                } else if token < level {
                    actions.insert(kind, Action::Reduce(rule));
                } else {
                    match assoc {
                        Assoc::Left => {
                            actions.insert(kind, Action::Reduce(rule));
                        }
                        Assoc::Right => {
                            actions.insert(kind, Action::Shift(target));
                        }
                        Assoc::NonAssoc => {}
                    }
                }
            }

            _ => {
                debug!(
                    "{}: state {index}: shift/reduce conflict on {kind:?} with rule {rule}, shifting",
                    grammar.name()
                );
                actions.insert(kind, Action::Shift(target));
            }
        }
    }

    actions
}
