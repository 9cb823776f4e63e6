//! Parse tables, generated once per grammar version on first use.

mod build;
mod sets;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

pub use self::sets::TermSet;

use super::grammar::{self, Grammar, NonTerminal};
use super::green::Kind;
use super::version::Version;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Accept,
}

#[derive(Debug)]
pub struct Table {
    grammar: Grammar,
    actions: Vec<HashMap<Kind, Action>>,
    gotos: Vec<HashMap<NonTerminal, usize>>,
}

lazy_static! {
    static ref CURRENT: Table = Table::build(grammar::current::grammar());
    static ref LEGACY: Table = Table::build(grammar::legacy::grammar());
}

impl Version {
    /// The parse table for this version of the language.
    pub fn table(self) -> &'static Table {
        match self {
            Version::Current => &CURRENT,
            Version::Legacy => &LEGACY,
        }
    }
}

impl Table {
    pub fn build(grammar: Grammar) -> Self {
        let built = build::build(&grammar);

        debug!(
            "{}: {} rules, {} states",
            grammar.name(),
            grammar.rules().len(),
            built.actions.len()
        );

        Self {
            grammar,
            actions: built.actions,
            gotos: built.gotos,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn state_count(&self) -> usize {
        self.actions.len()
    }

    pub fn action(&self, state: usize, kind: Kind) -> Option<Action> {
        self.actions[state].get(&kind).copied()
    }

    pub fn goto(&self, state: usize, nt: NonTerminal) -> Option<usize> {
        self.gotos[state].get(&nt).copied()
    }

    /// Whether `terminal` would eventually be shifted (or accepted) from the
    /// given state stack, following any reductions it triggers first. The
    /// stack itself is left untouched.
    pub fn accepts(&self, states: &[usize], terminal: Kind) -> bool {
        self.simulate(states, terminal).is_some()
    }

    /// The state stack after `terminal` is shifted onto `states`, or `None`
    /// if it is not accepted there.
    pub fn after(&self, states: &[usize], terminal: Kind) -> Option<Vec<usize>> {
        let (base, extra, action) = self.simulate(states, terminal)?;
        let Action::Shift(target) = action else {
            return None;
        };

        let mut after = states[..base].to_vec();
        after.extend(extra);
        after.push(target);
        Some(after)
    }

    /// Run the reductions `terminal` triggers. Returns how much of `states`
    /// survives, the states pushed on top of that, and the final shift or
    /// accept action.
    fn simulate(&self, states: &[usize], terminal: Kind) -> Option<(usize, Vec<usize>, Action)> {
        // States `..base` of the real stack are still live; `extra` holds
        // what the simulated reductions pushed on top of them.
        let mut base = states.len();
        let mut extra: Vec<usize> = Vec::new();

        loop {
            let top = match extra.last() {
                Some(&top) => top,
                None if base > 0 => states[base - 1],
                None => return None,
            };

            match self.action(top, terminal)? {
                action @ (Action::Shift(_) | Action::Accept) => return Some((base, extra, action)),
                Action::Reduce(rule) => {
                    let rule = self.grammar.rule(rule);
                    let mut pop = rule.symbols.len();

                    let from_extra = pop.min(extra.len());
                    extra.truncate(extra.len() - from_extra);
                    pop -= from_extra;

                    if pop >= base {
                        return None;
                    }
                    base -= pop;

                    let top = extra.last().copied().unwrap_or(states[base - 1]);
                    extra.push(self.goto(top, rule.lhs)?);
                }
            }
        }
    }

    /// The significant terminals the parser could continue with, given its
    /// state stack. Invalid tokens are never worth suggesting.
    pub fn expected(&self, states: &[usize]) -> Vec<Kind> {
        self.grammar
            .terminals()
            .iter()
            .copied()
            .filter(|kind| *kind != Kind::Error && self.accepts(states, *kind))
            .collect()
    }
}
