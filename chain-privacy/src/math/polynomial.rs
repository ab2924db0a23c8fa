use crate::gang::Scalar;
use std::ops::{Add, Mul, Sub};

/// Polynomial over the scalar field. `coefficients[k]` is the coefficient of
/// `x^k`; missing coefficients are zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<Scalar>,
}

impl Polynomial {
    /// Zero polynomial, with room for coefficients up to `x^degree`.
    pub fn new(degree: usize) -> Self {
        Polynomial {
            coefficients: vec![Scalar::zero(); degree + 1],
        }
    }

    pub fn from_coefficients(coefficients: Vec<Scalar>) -> Self {
        if coefficients.is_empty() {
            return Polynomial::new(0);
        }
        Polynomial { coefficients }
    }

    pub fn constant(c: Scalar) -> Self {
        Polynomial {
            coefficients: vec![c],
        }
    }

    /// Set the polynomial to `x0 + x1 * x`
    pub fn set2(mut self, x0: Scalar, x1: Scalar) -> Self {
        if self.coefficients.len() < 2 {
            self.coefficients.resize(2, Scalar::zero());
        }
        self.coefficients[0] = x0;
        self.coefficients[1] = x1;
        self
    }

    /// Index of the highest non zero coefficient. The zero polynomial has
    /// degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|c| *c != Scalar::zero())
            .unwrap_or(0)
    }

    pub fn get_coefficient_at(&self, k: usize) -> Scalar {
        self.coefficients
            .get(k)
            .copied()
            .unwrap_or_else(Scalar::zero)
    }

    pub fn set_coefficient_at(&mut self, k: usize, c: Scalar) {
        if k >= self.coefficients.len() {
            self.coefficients.resize(k + 1, Scalar::zero());
        }
        self.coefficients[k] = c;
    }

    /// Horner evaluation at `x`
    pub fn evaluate(&self, x: &Scalar) -> Scalar {
        self.coefficients
            .iter()
            .rev()
            .fold(Scalar::zero(), |acc, c| acc * x + c)
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'b Polynomial) -> Self::Output {
        let len = self.coefficients.len() + rhs.coefficients.len() - 1;
        let mut coefficients = vec![Scalar::zero(); len];
        for (i, a) in self.coefficients.iter().enumerate() {
            if *a == Scalar::zero() {
                continue;
            }
            for (j, b) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] = coefficients[i + j] + a * b;
            }
        }
        Polynomial { coefficients }
    }
}

std_ops_gen!(Polynomial, Mul, Polynomial, Polynomial, mul);

impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'b Polynomial) -> Self::Output {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let coefficients = (0..len)
            .map(|k| self.get_coefficient_at(k) + rhs.get_coefficient_at(k))
            .collect();
        Polynomial { coefficients }
    }
}

std_ops_gen!(Polynomial, Add, Polynomial, Polynomial, add);

impl<'a, 'b> Sub<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &'b Polynomial) -> Self::Output {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let coefficients = (0..len)
            .map(|k| self.get_coefficient_at(k) - rhs.get_coefficient_at(k))
            .collect();
        Polynomial { coefficients }
    }
}

std_ops_gen!(Polynomial, Sub, Polynomial, Polynomial, sub);
