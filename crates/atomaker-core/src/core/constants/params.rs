use crate::core::numeric::{Scalar, cast};
use std::fmt;

/// One of the seven base constants, in the fixed order used by every
/// constants file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstantField {
    ElectronMass,
    ProtonMass,
    NeutronMass,
    ReducedPlanck,
    VacuumPermittivity,
    ElementaryCharge,
    SpeedOfLight,
}

impl ConstantField {
    pub const ALL: [ConstantField; 7] = [
        ConstantField::ElectronMass,
        ConstantField::ProtonMass,
        ConstantField::NeutronMass,
        ConstantField::ReducedPlanck,
        ConstantField::VacuumPermittivity,
        ConstantField::ElementaryCharge,
        ConstantField::SpeedOfLight,
    ];

    /// Label used by the plain-text record format (`m_e: 1.0`).
    pub fn record_label(self) -> &'static str {
        match self {
            ConstantField::ElectronMass => "m_e",
            ConstantField::ProtonMass => "m_p",
            ConstantField::NeutronMass => "m_n",
            ConstantField::ReducedPlanck => "h_bar",
            ConstantField::VacuumPermittivity => "epsilon_0",
            ConstantField::ElementaryCharge => "e",
            ConstantField::SpeedOfLight => "c",
        }
    }
}

impl fmt::Display for ConstantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.record_label())
    }
}

/// The configurable base constants of the energy model.
///
/// Only the seven base fields are stored. Everything else (Planck constant,
/// Bohr radius, fine-structure constant, ...) is derived on demand so that
/// it always agrees with the current base values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants<T> {
    /// Mass of the electron.
    pub m_e: T,
    /// Mass of the proton.
    pub m_p: T,
    /// Mass of the neutron.
    pub m_n: T,
    /// Reduced Planck constant.
    pub h_bar: T,
    /// Vacuum permittivity.
    pub epsilon_0: T,
    /// Elementary charge.
    pub e: T,
    /// Speed of light in vacuum.
    pub c: T,
}

impl<T: Scalar> Default for PhysicalConstants<T> {
    fn default() -> Self {
        Self {
            m_e: cast(4.18493492472587e-3),
            m_p: cast(7.68417979427673),
            m_n: cast(7.69477146703062),
            h_bar: cast(1.0),
            epsilon_0: cast::<T>(0.25) / T::pi(),
            e: cast(1.0),
            c: cast(1.0),
        }
    }
}

impl<T: Scalar> PhysicalConstants<T> {
    /// Hartree atomic units: `m_e = ħ = e = 4πε0 = 1`, so `α ≈ 1/137` and the
    /// Rydberg energy is exactly one half.
    pub fn hartree_atomic() -> Self {
        Self {
            m_e: cast(1.0),
            m_p: cast(1836.15267343),
            m_n: cast(1838.68366173),
            h_bar: cast(1.0),
            epsilon_0: cast::<T>(0.25) / T::pi(),
            e: cast(1.0),
            c: cast(137.035999084),
        }
    }

    pub fn get(&self, field: ConstantField) -> T {
        match field {
            ConstantField::ElectronMass => self.m_e,
            ConstantField::ProtonMass => self.m_p,
            ConstantField::NeutronMass => self.m_n,
            ConstantField::ReducedPlanck => self.h_bar,
            ConstantField::VacuumPermittivity => self.epsilon_0,
            ConstantField::ElementaryCharge => self.e,
            ConstantField::SpeedOfLight => self.c,
        }
    }

    pub fn set(&mut self, field: ConstantField, value: T) {
        let slot = match field {
            ConstantField::ElectronMass => &mut self.m_e,
            ConstantField::ProtonMass => &mut self.m_p,
            ConstantField::NeutronMass => &mut self.m_n,
            ConstantField::ReducedPlanck => &mut self.h_bar,
            ConstantField::VacuumPermittivity => &mut self.epsilon_0,
            ConstantField::ElementaryCharge => &mut self.e,
            ConstantField::SpeedOfLight => &mut self.c,
        };
        *slot = value;
    }

    /// Planck constant `h = 2πħ`.
    #[inline]
    pub fn h(&self) -> T {
        T::two_pi() * self.h_bar
    }

    /// Bohr radius `4πε0ħ² / (m_e e²)`.
    #[inline]
    pub fn a_b(&self) -> T {
        cast::<T>(4.0) * T::pi() * self.epsilon_0 * self.h_bar.powi(2)
            / (self.m_e * self.e.powi(2))
    }

    /// Magnetic constant `1 / (c² ε0)`.
    #[inline]
    pub fn mu_0(&self) -> T {
        cast::<T>(1.0) / (self.c.powi(2) * self.epsilon_0)
    }

    /// Nuclear magneton `ħe / (2 m_p)`.
    #[inline]
    pub fn mu_k(&self) -> T {
        self.h_bar * self.e / (cast::<T>(2.0) * self.m_p)
    }

    /// Fine-structure constant `e² / (2 c ε0 h)`.
    #[inline]
    pub fn alpha(&self) -> T {
        self.e.powi(2) / (cast::<T>(2.0) * self.c * self.epsilon_0 * self.h())
    }

    /// Rydberg energy `(αc)² m_e / 2`.
    #[inline]
    pub fn rydberg(&self) -> T {
        (self.alpha() * self.c).powi(2) * self.m_e / cast(2.0)
    }
}
