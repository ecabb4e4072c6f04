//! Generic multivariate polynomial over a fixed coefficient table
//!
//! A polynomial is a slice of [`Term`]s, each an exponent tuple plus a
//! coefficient. Evaluation walks the table in order and forms every monomial
//! by sequential multiplication (variable 0 first, then variable 1, ...), so
//! a table listed in the same order as a reference expression reproduces that
//! expression's floating-point result exactly.

/// One term `coefficient * x0^e0 * x1^e1 * ... * x(N-1)^e(N-1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term<const N: usize> {
    /// Exponent of each variable
    pub exponents: [u8; N],
    /// Term coefficient
    pub coefficient: f64,
}

impl<const N: usize> Term<N> {
    /// Create a term
    #[must_use]
    pub const fn new(exponents: [u8; N], coefficient: f64) -> Self {
        Self {
            exponents,
            coefficient,
        }
    }

    /// Total degree of the term (sum of exponents)
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.exponents.iter().map(|&e| u32::from(e)).sum()
    }

    /// Value of the monomial (without the coefficient) at `vars`
    #[inline]
    #[must_use]
    pub fn monomial(&self, vars: &[f64; N]) -> f64 {
        let mut product = 1.0;
        for (&x, &e) in vars.iter().zip(&self.exponents) {
            for _ in 0..e {
                product *= x;
            }
        }
        product
    }

    /// Value of the full term at `vars`
    #[inline]
    #[must_use]
    pub fn evaluate(&self, vars: &[f64; N]) -> f64 {
        self.coefficient * self.monomial(vars)
    }
}

/// Polynomial in `N` variables backed by a borrowed term table
#[derive(Debug, Clone, Copy)]
pub struct Polynomial<'a, const N: usize> {
    terms: &'a [Term<N>],
}

impl<'a, const N: usize> Polynomial<'a, N> {
    /// Wrap a term table
    #[must_use]
    pub const fn new(terms: &'a [Term<N>]) -> Self {
        Self { terms }
    }

    /// The underlying table
    #[must_use]
    pub fn terms(&self) -> &'a [Term<N>] {
        self.terms
    }

    /// Number of terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest total degree of any term (0 for an empty table)
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms.iter().map(Term::degree).max().unwrap_or(0)
    }

    /// Coefficient of the term with the given exponents, if present
    #[must_use]
    pub fn coefficient(&self, exponents: [u8; N]) -> Option<f64> {
        self.terms
            .iter()
            .find(|t| t.exponents == exponents)
            .map(|t| t.coefficient)
    }

    /// Evaluate the polynomial at `vars`
    #[must_use]
    pub fn evaluate(&self, vars: [f64; N]) -> f64 {
        self.evaluate_from(0.0, vars)
    }

    /// Evaluate the polynomial at `vars`, starting the running sum at `base`
    ///
    /// Terms are added left to right in table order after `base`.
    #[must_use]
    pub fn evaluate_from(&self, base: f64, vars: [f64; N]) -> f64 {
        self.terms
            .iter()
            .fold(base, |acc, term| acc + term.evaluate(&vars))
    }
}
