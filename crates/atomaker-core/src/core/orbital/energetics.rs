use super::state::Orbital;
use crate::core::constants::PhysicalConstants;
use crate::core::numeric::{Scalar, cast};

/// How the angular factor `1/(j+1/2) - 3/(4n)` of the fine-structure
/// correction is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FineStructure {
    /// Both quotients truncated to integers: the factor is 1 when
    /// `j + 1/2 = 1` and 0 otherwise.
    #[default]
    Truncated,
    /// Real-valued quotients, the textbook hydrogen fine structure.
    Exact,
}

impl Orbital {
    /// Number of proton charges by which an electron in `other` hides the
    /// nucleus from an electron in `self`.
    pub fn shielding_from<T: Scalar>(&self, other: &Orbital) -> T {
        cast(self.shielding_fraction(other))
    }

    fn shielding_fraction(&self, other: &Orbital) -> f64 {
        if self == other {
            return 0.0;
        }
        if self.n < other.n {
            return 0.0;
        }
        if other.n + 1 < self.n {
            return 1.0;
        }
        if other.n < self.n {
            return if self.l > 1 { 1.0 } else { 0.85 };
        }
        // Same principal shell from here on.
        if other.l > self.l && (other.l != 1 || self.l != 0) {
            return 0.0;
        }
        if self.l > 1 && self.l > other.l {
            return 1.0;
        }
        0.35
    }

    /// Magnitude of the orbital angular momentum, `ħ√(l(l+1))`.
    pub fn angular_momentum<T: Scalar>(&self, c: &PhysicalConstants<T>) -> T {
        let l: T = cast(self.l as f64);
        c.h_bar * (l * (l + cast(1.0))).sqrt()
    }

    /// Mean inverse-cube distance from the nucleus, `⟨r⁻³⟩`. Undefined for `l = 0`.
    pub fn inverse_cube_radius<T: Scalar>(&self, c: &PhysicalConstants<T>, z: T) -> T {
        let l: T = cast(self.l as f64);
        let shell: T = cast(self.principal_number() as f64);
        (z / (c.a_b() * shell)).powi(3) / (l * (l + cast(0.5)) * (l + cast(1.0)))
    }

    /// Magnetic field along the quantization axis induced by an electron in this state.
    pub fn magnetic_field<T: Scalar>(&self, c: &PhysicalConstants<T>, z: T) -> T {
        if self.l == 0 {
            return cast(0.0);
        }
        let m_l: T = cast(self.m_l as f64);
        c.mu_0() * c.e * self.angular_momentum(c) * m_l * self.inverse_cube_radius(c, z)
            / (cast::<T>(4.0) * T::pi() * c.m_e)
    }

    /// Hydrogen-like principal energy for nuclear charge `z`.
    pub fn principal_energy<T: Scalar>(&self, c: &PhysicalConstants<T>, z: T) -> T {
        let shell: T = cast(self.principal_number() as f64);
        -(c.m_e * c.e.powi(4) * z.powi(2))
            / (cast::<T>(2.0) * (shell * c.h() * cast(2.0) * c.epsilon_0).powi(2))
    }

    /// Relative fine-structure correction to the principal energy, using the
    /// default [`FineStructure`] rule.
    pub fn fine_structure<T: Scalar>(&self, c: &PhysicalConstants<T>, z: T) -> T {
        self.fine_structure_with(c, z, FineStructure::default())
    }

    pub fn fine_structure_with<T: Scalar>(
        &self,
        c: &PhysicalConstants<T>,
        z: T,
        rule: FineStructure,
    ) -> T {
        let shell: T = cast(self.principal_number() as f64);
        let angular: T = match rule {
            // 1/(j+1/2) and 3/(4(n+1)) in integer arithmetic: the first is 1 only
            // for j + 1/2 = 1, the second is always 0.
            FineStructure::Truncated => cast(if self.j_plus_half() == 1 { 1.0 } else { 0.0 }),
            FineStructure::Exact => {
                let jph: T = cast(self.j_plus_half() as f64);
                cast::<T>(1.0) / jph - cast::<T>(3.0) / (cast::<T>(4.0) * shell)
            }
        };
        angular * (z * c.alpha()).powi(2) / shell
    }

    /// Zeeman shift in an external field `b` along the quantization axis.
    pub fn zeeman_shift<T: Scalar>(&self, c: &PhysicalConstants<T>, b: T) -> T {
        let m_l: T = cast(self.m_l as f64);
        -c.h_bar * c.e * m_l * b / (cast::<T>(2.0) * c.m_e)
    }

    /// Total single-state energy for effective nuclear charge `z` in field `b`.
    pub fn energy<T: Scalar>(&self, c: &PhysicalConstants<T>, z: T, b: T) -> T {
        self.energy_with(c, z, b, FineStructure::default())
    }

    pub fn energy_with<T: Scalar>(
        &self,
        c: &PhysicalConstants<T>,
        z: T,
        b: T,
        rule: FineStructure,
    ) -> T {
        self.principal_energy(c, z) * (cast::<T>(1.0) + self.fine_structure_with(c, z, rule))
            + self.zeeman_shift(c, b)
    }
}
