//! Identifier tokens that let later sections point at drugs and reactions.
//!
//! Every drug and reaction subtree gets an opaque `id root` token when it is
//! built. The causality section, built afterwards, refers back to them by
//! position in the issue order instead of walking the tree. Tokens live for
//! one encoding pass only and have nothing to do with storage keys.

use uuid::Uuid;

/// Source of unique opaque tokens.
pub trait TokenSource {
    fn next_token(&mut self) -> String;
}

/// Random UUID v4 tokens; the default for real exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokens;

impl TokenSource for UuidTokens {
    fn next_token(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable `prefix-N` tokens for reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialTokens {
    prefix: String,
    next: u64,
}

impl SequentialTokens {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl TokenSource for SequentialTokens {
    fn next_token(&mut self) -> String {
        let token = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        token
    }
}

/// A token together with the position of the entry it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedToken {
    pub token: String,
    /// Index into the case's drug or reaction list.
    pub entry_index: usize,
}

/// Issues tokens for one encoding pass and remembers them in issue order.
#[derive(Debug)]
pub struct IdentifierLinker<S: TokenSource> {
    source: S,
    drugs: Vec<LinkedToken>,
    reactions: Vec<LinkedToken>,
}

impl<S: TokenSource> IdentifierLinker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            drugs: Vec::new(),
            reactions: Vec::new(),
        }
    }

    /// Issue a token not tied to any entry.
    pub fn issue(&mut self) -> String {
        self.source.next_token()
    }

    /// Issue the token for the drug at `entry_index`.
    pub fn issue_drug(&mut self, entry_index: usize) -> String {
        let token = self.issue();
        self.drugs.push(LinkedToken {
            token: token.clone(),
            entry_index,
        });
        token
    }

    /// Issue the token for the reaction at `entry_index`.
    pub fn issue_reaction(&mut self, entry_index: usize) -> String {
        let token = self.issue();
        self.reactions.push(LinkedToken {
            token: token.clone(),
            entry_index,
        });
        token
    }

    pub fn drugs(&self) -> &[LinkedToken] {
        &self.drugs
    }

    pub fn reactions(&self) -> &[LinkedToken] {
        &self.reactions
    }

    pub fn first_drug(&self) -> Option<&str> {
        self.drugs.first().map(|linked| linked.token.as_str())
    }

    pub fn first_reaction(&self) -> Option<&str> {
        self.reactions.first().map(|linked| linked.token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_tokens_count_up() {
        let mut tokens = SequentialTokens::new("T");
        assert_eq!(tokens.next_token(), "T-1");
        assert_eq!(tokens.next_token(), "T-2");
    }

    #[test]
    fn tokens_are_recorded_in_issue_order() {
        let mut linker = IdentifierLinker::new(SequentialTokens::new("id"));
        linker.issue_drug(0);
        linker.issue_drug(1);
        linker.issue_reaction(0);

        let drug_tokens: Vec<_> = linker.drugs().iter().map(|d| d.token.as_str()).collect();
        assert_eq!(drug_tokens, vec!["id-1", "id-2"]);
        assert_eq!(linker.drugs()[1].entry_index, 1);
        assert_eq!(linker.first_drug(), Some("id-1"));
        assert_eq!(linker.first_reaction(), Some("id-3"));
    }

    #[test]
    fn empty_linker_has_no_first_tokens() {
        let linker = IdentifierLinker::new(UuidTokens);
        assert_eq!(linker.first_drug(), None);
        assert_eq!(linker.first_reaction(), None);
    }

    #[test]
    fn uuid_tokens_are_unique() {
        let mut linker = IdentifierLinker::new(UuidTokens);
        for index in 0..50 {
            linker.issue_drug(index);
            linker.issue_reaction(index);
        }
        let unique: HashSet<_> = linker
            .drugs()
            .iter()
            .chain(linker.reactions())
            .map(|linked| linked.token.clone())
            .collect();
        assert_eq!(unique.len(), 100);
    }
}
