//! Fresh symbol generation for GN1/GN2.

/// Issues `A0`, `A1`, `A2`, ... and never repeats a name.
///
/// Each run owns its own generator, so numbering restarts at zero for
/// every run and two runs over the same program and input agree exactly.
#[derive(Debug, Clone, Default)]
pub struct SymbolGenerator {
    next: usize,
}

impl SymbolGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a name no earlier call has returned.
    pub fn fresh(&mut self) -> String {
        let name = format!("A{}", self.next);
        self.next += 1;
        name
    }

    /// Number of symbols issued so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence() {
        let mut symbols = SymbolGenerator::new();
        assert_eq!(symbols.fresh(), "A0");
        assert_eq!(symbols.fresh(), "A1");
        assert_eq!(symbols.fresh(), "A2");
        assert_eq!(symbols.issued(), 3);
    }

    #[test]
    fn independent_generators_restart() {
        let mut first = SymbolGenerator::new();
        first.fresh();
        let mut second = SymbolGenerator::new();
        assert_eq!(second.fresh(), "A0");
    }
}
