//! Operator overloads for [`Polynomial`].
//!
//! Binary operators are implemented for owned and borrowed operands and
//! delegate to the `*_ref` methods. Compound assignment computes the
//! binary result and replaces `self`.

use std::ops::{
    Add, AddAssign, BitXor, BitXorAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::polynomial::Polynomial;

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait for Polynomial {
            type Output = Polynomial;

            fn $method(self, other: Polynomial) -> Polynomial {
                self.$inner(&other)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, other: &Polynomial) -> Polynomial {
                self.$inner(other)
            }
        }

        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, other: Polynomial) -> Polynomial {
                self.$inner(&other)
            }
        }

        impl<'b> $trait<&'b Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, other: &'b Polynomial) -> Polynomial {
                self.$inner(other)
            }
        }
    };
}

forward_binop!(Add, add, add_ref);
forward_binop!(Sub, sub, sub_ref);
forward_binop!(Mul, mul, mul_ref);

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.neg_ref()
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.neg_ref()
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, c: f64) -> Polynomial {
        self.scale(c)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, c: f64) -> Polynomial {
        self.scale(c)
    }
}

impl Mul<Polynomial> for f64 {
    type Output = Polynomial;

    fn mul(self, p: Polynomial) -> Polynomial {
        p.scale(self)
    }
}

impl Mul<&Polynomial> for f64 {
    type Output = Polynomial;

    fn mul(self, p: &Polynomial) -> Polynomial {
        p.scale(self)
    }
}

/// `p ^ n` is exponentiation, not exclusive or.
impl BitXor<u32> for Polynomial {
    type Output = Polynomial;

    fn bitxor(self, n: u32) -> Polynomial {
        self.pow(n)
    }
}

impl BitXor<u32> for &Polynomial {
    type Output = Polynomial;

    fn bitxor(self, n: u32) -> Polynomial {
        self.pow(n)
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, other: &Polynomial) {
        *self = self.add_ref(other);
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, other: Polynomial) {
        *self += &other;
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, other: &Polynomial) {
        *self = self.sub_ref(other);
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, other: Polynomial) {
        *self -= &other;
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, other: &Polynomial) {
        *self = self.mul_ref(other);
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, other: Polynomial) {
        *self *= &other;
    }
}

impl MulAssign<f64> for Polynomial {
    fn mul_assign(&mut self, c: f64) {
        *self = self.scale(c);
    }
}

impl BitXorAssign<u32> for Polynomial {
    fn bitxor_assign(&mut self, n: u32) {
        *self = self.pow(n);
    }
}

impl num_traits::Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl num_traits::One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}
