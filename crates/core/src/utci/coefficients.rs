//! UTCI regression coefficients
//!
//! The 210-term sixth-order polynomial of the operational UTCI procedure, as
//! `[Ta, va, D_Tmrt, Pa]` exponent tuples. Rows are kept in the published
//! listing order, including the `Ta * Pa^4` term that appears after the
//! `Ta * D_Tmrt * Pa^4` row; evaluation sums in row order.
//!
//! Do not reformat or reorder the rows.
//!
//! # References
//! - Bröde, P. et al. (2012). "Deriving the operational procedure for the
//!   Universal Thermal Climate Index (UTCI)". Int. J. Biometeorol. 56, 481-494.
//! - ISB Commission 6, UTCI reference implementation (`UTCI_a002.f90`).

use crate::solver::polynomial::{Polynomial, Term};

/// Number of terms in the table
pub const UTCI_TERM_COUNT: usize = 210;

/// Variable order of every exponent tuple
pub const UTCI_VARIABLES: [&str; 4] = ["Ta", "va", "D_Tmrt", "Pa"];

/// UTCI offset polynomial terms, `UTCI - Ta` in °C
#[rustfmt::skip]
pub const UTCI_TERMS: [Term<4>; UTCI_TERM_COUNT] = [
    Term::new([0, 0, 0, 0],  6.07562052E-01),
    Term::new([1, 0, 0, 0], -2.27712343E-02),
    Term::new([2, 0, 0, 0],  8.06470249E-04),
    Term::new([3, 0, 0, 0], -1.54271372E-04),
    Term::new([4, 0, 0, 0], -3.24651735E-06),
    Term::new([5, 0, 0, 0],  7.32602852E-08),
    Term::new([6, 0, 0, 0],  1.35959073E-09),
    Term::new([0, 1, 0, 0], -2.25836520E+00),
    Term::new([1, 1, 0, 0],  8.80326035E-02),
    Term::new([2, 1, 0, 0],  2.16844454E-03),
    Term::new([3, 1, 0, 0], -1.53347087E-05),
    Term::new([4, 1, 0, 0], -5.72983704E-07),
    Term::new([5, 1, 0, 0], -2.55090145E-09),
    Term::new([0, 2, 0, 0], -7.51269505E-01),
    Term::new([1, 2, 0, 0], -4.08350271E-03),
    Term::new([2, 2, 0, 0], -5.21670675E-05),
    Term::new([3, 2, 0, 0],  1.94544667E-06),
    Term::new([4, 2, 0, 0],  1.14099531E-08),
    Term::new([0, 3, 0, 0],  1.58137256E-01),
    Term::new([1, 3, 0, 0], -6.57263143E-05),
    Term::new([2, 3, 0, 0],  2.22697524E-07),
    Term::new([3, 3, 0, 0], -4.16117031E-08),
    Term::new([0, 4, 0, 0], -1.27762753E-02),
    Term::new([1, 4, 0, 0],  9.66891875E-06),
    Term::new([2, 4, 0, 0],  2.52785852E-09),
    Term::new([0, 5, 0, 0],  4.56306672E-04),
    Term::new([1, 5, 0, 0], -1.74202546E-07),
    Term::new([0, 6, 0, 0], -5.91491269E-06),
    Term::new([0, 0, 1, 0],  3.98374029E-01),
    Term::new([1, 0, 1, 0],  1.83945314E-04),
    Term::new([2, 0, 1, 0], -1.73754510E-04),
    Term::new([3, 0, 1, 0], -7.60781159E-07),
    Term::new([4, 0, 1, 0],  3.77830287E-08),
    Term::new([5, 0, 1, 0],  5.43079673E-10),
    Term::new([0, 1, 1, 0], -2.00518269E-02),
    Term::new([1, 1, 1, 0],  8.92859837E-04),
    Term::new([2, 1, 1, 0],  3.45433048E-06),
    Term::new([3, 1, 1, 0], -3.77925774E-07),
    Term::new([4, 1, 1, 0], -1.69699377E-09),
    Term::new([0, 2, 1, 0],  1.69992415E-04),
    Term::new([1, 2, 1, 0], -4.99204314E-05),
    Term::new([2, 2, 1, 0],  2.47417178E-07),
    Term::new([3, 2, 1, 0],  1.07596466E-08),
    Term::new([0, 3, 1, 0],  8.49242932E-05),
    Term::new([1, 3, 1, 0],  1.35191328E-06),
    Term::new([2, 3, 1, 0], -6.21531254E-09),
    Term::new([0, 4, 1, 0], -4.99410301E-06),
    Term::new([1, 4, 1, 0], -1.89489258E-08),
    Term::new([0, 5, 1, 0],  8.15300114E-08),
    Term::new([0, 0, 2, 0],  7.55043090E-04),
    Term::new([1, 0, 2, 0], -5.65095215E-05),
    Term::new([2, 0, 2, 0], -4.52166564E-07),
    Term::new([3, 0, 2, 0],  2.46688878E-08),
    Term::new([4, 0, 2, 0],  2.42674348E-10),
    Term::new([0, 1, 2, 0],  1.54547250E-04),
    Term::new([1, 1, 2, 0],  5.24110970E-06),
    Term::new([2, 1, 2, 0], -8.75874982E-08),
    Term::new([3, 1, 2, 0], -1.50743064E-09),
    Term::new([0, 2, 2, 0], -1.56236307E-05),
    Term::new([1, 2, 2, 0], -1.33895614E-07),
    Term::new([2, 2, 2, 0],  2.49709824E-09),
    Term::new([0, 3, 2, 0],  6.51711721E-07),
    Term::new([1, 3, 2, 0],  1.94960053E-09),
    Term::new([0, 4, 2, 0], -1.00361113E-08),
    Term::new([0, 0, 3, 0], -1.21206673E-05),
    Term::new([1, 0, 3, 0], -2.18203660E-07),
    Term::new([2, 0, 3, 0],  7.51269482E-09),
    Term::new([3, 0, 3, 0],  9.79063848E-11),
    Term::new([0, 1, 3, 0],  1.25006734E-06),
    Term::new([1, 1, 3, 0], -1.81584736E-09),
    Term::new([2, 1, 3, 0], -3.52197671E-10),
    Term::new([0, 2, 3, 0], -3.36514630E-08),
    Term::new([1, 2, 3, 0],  1.35908359E-10),
    Term::new([0, 3, 3, 0],  4.17032620E-10),
    Term::new([0, 0, 4, 0], -1.30369025E-09),
    Term::new([1, 0, 4, 0],  4.13908461E-10),
    Term::new([2, 0, 4, 0],  9.22652254E-12),
    Term::new([0, 1, 4, 0], -5.08220384E-09),
    Term::new([1, 1, 4, 0], -2.24730961E-11),
    Term::new([0, 2, 4, 0],  1.17139133E-10),
    Term::new([0, 0, 5, 0],  6.62154879E-10),
    Term::new([1, 0, 5, 0],  4.03863260E-13),
    Term::new([0, 1, 5, 0],  1.95087203E-12),
    Term::new([0, 0, 6, 0], -4.73602469E-12),

    Term::new([0, 0, 0, 1],  5.12733497E+00),
    Term::new([1, 0, 0, 1], -3.12788561E-01),
    Term::new([2, 0, 0, 1], -1.96701861E-02),
    Term::new([3, 0, 0, 1],  9.99690870E-04),
    Term::new([4, 0, 0, 1],  9.51738512E-06),
    Term::new([5, 0, 0, 1], -4.66426341E-07),
    Term::new([0, 1, 0, 1],  5.48050612E-01),
    Term::new([1, 1, 0, 1], -3.30552823E-03),
    Term::new([2, 1, 0, 1], -1.64119440E-03),
    Term::new([3, 1, 0, 1], -5.16670694E-06),
    Term::new([4, 1, 0, 1],  9.52692432E-07),
    Term::new([0, 2, 0, 1], -4.29223622E-02),
    Term::new([1, 2, 0, 1],  5.00845667E-03),
    Term::new([2, 2, 0, 1],  1.00601257E-06),
    Term::new([3, 2, 0, 1], -1.81748644E-06),
    Term::new([0, 3, 0, 1], -1.25813502E-03),
    Term::new([1, 3, 0, 1], -1.79330391E-04),
    Term::new([2, 3, 0, 1],  2.34994441E-06),
    Term::new([0, 4, 0, 1],  1.29735808E-04),
    Term::new([1, 4, 0, 1],  1.29064870E-06),
    Term::new([0, 5, 0, 1], -2.28558686E-06),
    Term::new([0, 0, 1, 1], -3.69476348E-02),
    Term::new([1, 0, 1, 1],  1.62325322E-03),
    Term::new([2, 0, 1, 1], -3.14279680E-05),
    Term::new([3, 0, 1, 1],  2.59835559E-06),
    Term::new([4, 0, 1, 1], -4.77136523E-08),
    Term::new([0, 1, 1, 1],  8.64203390E-03),
    Term::new([1, 1, 1, 1], -6.87405181E-04),
    Term::new([2, 1, 1, 1], -9.13863872E-06),
    Term::new([3, 1, 1, 1],  5.15916806E-07),
    Term::new([0, 2, 1, 1], -3.59217476E-05),
    Term::new([1, 2, 1, 1],  3.28696511E-05),
    Term::new([2, 2, 1, 1], -7.10542454E-07),
    Term::new([0, 3, 1, 1], -1.24382300E-05),
    Term::new([1, 3, 1, 1], -7.38584400E-09),
    Term::new([0, 4, 1, 1],  2.20609296E-07),
    Term::new([0, 0, 2, 1], -7.32469180E-04),
    Term::new([1, 0, 2, 1], -1.87381964E-05),
    Term::new([2, 0, 2, 1],  4.80925239E-06),
    Term::new([3, 0, 2, 1], -8.75492040E-08),
    Term::new([0, 1, 2, 1],  2.77862930E-05),
    Term::new([1, 1, 2, 1], -5.06004592E-06),
    Term::new([2, 1, 2, 1],  1.14325367E-07),
    Term::new([0, 2, 2, 1],  2.53016723E-06),
    Term::new([1, 2, 2, 1], -1.72857035E-08),
    Term::new([0, 3, 2, 1], -3.95079398E-08),
    Term::new([0, 0, 3, 1], -3.59413173E-07),
    Term::new([1, 0, 3, 1],  7.04388046E-07),
    Term::new([2, 0, 3, 1], -1.89309167E-08),
    Term::new([0, 1, 3, 1], -4.79768731E-07),
    Term::new([1, 1, 3, 1],  7.96079978E-09),
    Term::new([0, 2, 3, 1],  1.62897058E-09),
    Term::new([0, 0, 4, 1],  3.94367674E-08),
    Term::new([1, 0, 4, 1], -1.18566247E-09),
    Term::new([0, 1, 4, 1],  3.34678041E-10),
    Term::new([0, 0, 5, 1], -1.15606447E-10),

    Term::new([0, 0, 0, 2], -2.80626406E+00),
    Term::new([1, 0, 0, 2],  5.48712484E-01),
    Term::new([2, 0, 0, 2], -3.99428410E-03),
    Term::new([3, 0, 0, 2], -9.54009191E-04),
    Term::new([4, 0, 0, 2],  1.93090978E-05),
    Term::new([0, 1, 0, 2], -3.08806365E-01),
    Term::new([1, 1, 0, 2],  1.16952364E-02),
    Term::new([2, 1, 0, 2],  4.95271903E-04),
    Term::new([3, 1, 0, 2], -1.90710882E-05),
    Term::new([0, 2, 0, 2],  2.10787756E-03),
    Term::new([1, 2, 0, 2], -6.98445738E-04),
    Term::new([2, 2, 0, 2],  2.30109073E-05),
    Term::new([0, 3, 0, 2],  4.17856590E-04),
    Term::new([1, 3, 0, 2], -1.27043871E-05),
    Term::new([0, 4, 0, 2], -3.04620472E-06),
    Term::new([0, 0, 1, 2],  5.14507424E-02),
    Term::new([1, 0, 1, 2], -4.32510997E-03),
    Term::new([2, 0, 1, 2],  8.99281156E-05),
    Term::new([3, 0, 1, 2], -7.14663943E-07),
    Term::new([0, 1, 1, 2], -2.66016305E-04),
    Term::new([1, 1, 1, 2],  2.63789586E-04),
    Term::new([2, 1, 1, 2], -7.01199003E-06),
    Term::new([0, 2, 1, 2], -1.06823306E-04),
    Term::new([1, 2, 1, 2],  3.61341136E-06),
    Term::new([0, 3, 1, 2],  2.29748967E-07),
    Term::new([0, 0, 2, 2],  3.04788893E-04),
    Term::new([1, 0, 2, 2], -6.42070836E-05),
    Term::new([2, 0, 2, 2],  1.16257971E-06),
    Term::new([0, 1, 2, 2],  7.68023384E-06),
    Term::new([1, 1, 2, 2], -5.47446896E-07),
    Term::new([0, 2, 2, 2], -3.59937910E-08),
    Term::new([0, 0, 3, 2], -4.36497725E-06),
    Term::new([1, 0, 3, 2],  1.68737969E-07),
    Term::new([0, 1, 3, 2],  2.67489271E-08),
    Term::new([0, 0, 4, 2],  3.23926897E-09),

    Term::new([0, 0, 0, 3], -3.53874123E-02),
    Term::new([1, 0, 0, 3], -2.21201190E-01),
    Term::new([2, 0, 0, 3],  1.55126038E-02),
    Term::new([3, 0, 0, 3], -2.63917279E-04),
    Term::new([0, 1, 0, 3],  4.53433455E-02),
    Term::new([1, 1, 0, 3], -4.32943862E-03),
    Term::new([2, 1, 0, 3],  1.45389826E-04),
    Term::new([0, 2, 0, 3],  2.17508610E-04),
    Term::new([1, 2, 0, 3], -6.66724702E-05),
    Term::new([0, 3, 0, 3],  3.33217140E-05),
    Term::new([0, 0, 1, 3], -2.26921615E-03),
    Term::new([1, 0, 1, 3],  3.80261982E-04),
    Term::new([2, 0, 1, 3], -5.45314314E-09),
    Term::new([0, 1, 1, 3], -7.96355448E-04),
    Term::new([1, 1, 1, 3],  2.53458034E-05),
    Term::new([0, 2, 1, 3], -6.31223658E-06),
    Term::new([0, 0, 2, 3],  3.02122035E-04),
    Term::new([1, 0, 2, 3], -4.77403547E-06),
    Term::new([0, 1, 2, 3],  1.73825715E-06),
    Term::new([0, 0, 3, 3], -4.09087898E-07),

    Term::new([0, 0, 0, 4],  6.14155345E-01),
    Term::new([2, 0, 0, 4],  1.33374846E-03),
    Term::new([0, 1, 0, 4],  3.55375387E-03),
    Term::new([1, 1, 0, 4], -5.13027851E-04),
    Term::new([0, 2, 0, 4],  1.02449757E-04),
    Term::new([0, 0, 1, 4], -1.48526421E-03),
    Term::new([1, 0, 1, 4], -4.11469183E-05),
    Term::new([1, 0, 0, 4], -6.16755931E-02),
    Term::new([0, 1, 1, 4], -6.80434415E-06),
    Term::new([0, 0, 2, 4], -9.77675906E-06),

    Term::new([0, 0, 0, 5],  8.82773108E-02),
    Term::new([1, 0, 0, 5], -3.01859306E-03),
    Term::new([0, 1, 0, 5],  1.04452989E-03),
    Term::new([0, 0, 1, 5],  2.47090539E-04),

    Term::new([0, 0, 0, 6],  1.48348065E-03),
];

/// The coefficient table as a [`Polynomial`]
pub const UTCI_POLYNOMIAL: Polynomial<'static, 4> = Polynomial::new(&UTCI_TERMS);

/// Accessor for [`UTCI_POLYNOMIAL`]
#[must_use]
pub fn utci_polynomial() -> Polynomial<'static, 4> {
    UTCI_POLYNOMIAL
}
