use crate::core::io::traits::InputDeck;
use crate::core::models::options::CalculationOptions;
use crate::core::models::structure::Structure;
use std::io::{self, Write};

/// The Gaussian input deck (`.com`) format.
///
/// Layout, one item per line:
///
/// ```text
/// %Mem=<MEM_TOTAL>mb
/// #p <UNRESTRICTED><METHOD>/<BASIS> <JOB_TYPE> <INTEGRAL>
/// EmpiricalDispersion=<DFT_D>        (only when dispersion is enabled)
///
/// <TITLE>
///
/// <CHARGE> <MULTIPLICITY>
/// <symbol> <x> <y> <z>               (one line per atom)
///
/// ```
pub struct GaussianInputFile;

impl InputDeck for GaussianInputFile {
    type Options = CalculationOptions;
    type Error = io::Error;

    fn write_to(
        structure: &Structure,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writeln!(writer, "%Mem={}mb", options.mem_total)?;
        writeln!(writer, "{}", options.route_line())?;
        if let Some(dispersion) = &options.dft_d {
            writeln!(writer, "EmpiricalDispersion={}", dispersion)?;
        }
        writeln!(writer)?;
        writeln!(writer, "{}", options.title)?;
        writeln!(writer)?;
        writeln!(writer, "{} {}", options.charge, options.multiplicity)?;
        for (symbol, p) in structure.chemical_symbols().zip(structure.positions()) {
            // Debug formatting is the shortest representation that round-trips.
            writeln!(writer, "{} {:?} {:?} {:?}", symbol, p.x, p.y, p.z)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
