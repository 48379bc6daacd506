use atomaker::core::constants::PhysicalConstants;
use atomaker::core::numeric::Scalar;
use atomaker::core::orbital::Orbital;
use atomaker::workflows::configure::{ConfigurationReport, PlacementRecord, StateEnergy};
use atomaker::workflows::energies::EnergyTable;
use std::io::{self, Write};

const ENERGY_DECIMALS: usize = 6;

fn write_state<W: Write, T: Scalar>(w: &mut W, indent: &str, state: &StateEnergy<T>) -> io::Result<()> {
    writeln!(
        w,
        "{}{}  E: {:.*}",
        indent, state.orbital, ENERGY_DECIMALS, state.energy
    )
}

fn write_delta<W: Write, T: Scalar>(
    w: &mut W,
    indent: &str,
    from: &Orbital,
    to: &Orbital,
    energy: T,
) -> io::Result<()> {
    let dn = i64::from(from.n) - i64::from(to.n);
    let dl = i64::from(from.l) - i64::from(to.l);
    let ds = i64::from(from.spin.is_up()) - i64::from(to.spin.is_up());
    let dm_l = i64::from(from.m_l) - i64::from(to.m_l);
    writeln!(
        w,
        "{}delta  dn: {}  dl: {}  ds: {}  dm_l: {}  dE: {:.*}",
        indent, dn, dl, ds, dm_l, ENERGY_DECIMALS, energy
    )
}

fn write_placement<W: Write, T: Scalar>(w: &mut W, record: &PlacementRecord<T>) -> io::Result<()> {
    writeln!(w, "Electron {}:", record.index)?;
    write_state(w, "  ", &record.placed)?;

    for step in &record.moves {
        writeln!(w, "  Reseated:")?;
        write_state(w, "    ", &step.from)?;
        write_state(w, "    ", &step.to)?;
        write_delta(
            w,
            "    ",
            &step.from.orbital,
            &step.to.orbital,
            step.from.energy - step.to.energy,
        )?;
    }

    if let Some(settled) = &record.settled {
        writeln!(w, "  Actual energy:")?;
        write_state(w, "    ", settled)?;
        write_delta(
            w,
            "    ",
            &record.placed.orbital,
            &settled.orbital,
            record.placed.energy - settled.energy,
        )?;
    }

    if !record.converged {
        writeln!(
            w,
            "  Relaxation stopped after {} reseat(s) without converging.",
            record.moves.len()
        )?;
    }
    Ok(())
}

/// Writes the full orbital configuration report.
pub fn render_configuration<W: Write, T: Scalar>(
    w: &mut W,
    report: &ConfigurationReport<T>,
) -> io::Result<()> {
    writeln!(w, "Z = {}", report.protons)?;
    for record in &report.placements {
        write_placement(w, record)?;
    }
    if let Some(index) = report.rejected {
        writeln!(w, "Electron {} was rejected", index)?;
    }

    writeln!(w, "Valence electrons:")?;
    for state in &report.valence {
        write_state(w, "  ", state)?;
    }

    writeln!(
        w,
        "Total energy: {:.*}",
        ENERGY_DECIMALS, report.total_energy
    )?;
    if !report.ionization_energies.is_empty() {
        writeln!(w, "Ionization energies:")?;
        for (k, energy) in report.ionization_energies.iter().enumerate() {
            writeln!(w, "  {} electron(s): {:.*}", k + 1, ENERGY_DECIMALS, energy)?;
        }
    }
    Ok(())
}

/// Writes one line per state, prefixed by its position in the shell.
pub fn render_energy_table<W: Write, T: Scalar>(w: &mut W, table: &EnergyTable<T>) -> io::Result<()> {
    writeln!(
        w,
        "Shell n = {} (Z = {}): {} state(s)",
        table.shell,
        table.protons,
        table.levels.len()
    )?;
    for level in &table.levels {
        writeln!(
            w,
            "{}\t{}  E: {:.*}",
            level.index, level.orbital, ENERGY_DECIMALS, level.energy
        )?;
    }
    Ok(())
}

/// Writes the constants in the same record format the loader reads.
pub fn render_constants<W: Write, T: Scalar>(
    w: &mut W,
    constants: &PhysicalConstants<T>,
) -> io::Result<()> {
    write!(w, "{}", constants.to_record())
}
