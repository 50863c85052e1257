//! Synthetic MOPAC output used by the unit tests.

pub const GEOMETRY_CH2: &[&str] = &[
    "         1         C          0.00000000  *   0.00000000  *   0.00000000  *",
    "         2         H          1.09000000  *   0.00000000  *   0.00000000  *",
    "         3         H         -0.36333333  *   1.02766186  *   0.00000000  *",
];

pub const CHARGES_CH2: &[&str] = &[
    "          1    C       4.1234        -0.1234",
    "          2    H       0.9383         0.0617",
    "          3    H       0.9383         0.0617",
];

const PREAMBLE: &str = "\
 *******************************************************************************
 **                                MOPAC2016                                  **
 *******************************************************************************

 PM7 PRECISE MULLIK

";

const ENERGIES: &str = "\
          FINAL HEAT OF FORMATION =        -17.89188 KCAL/MOL =     -74.85962 KJ/MOL


          TOTAL ENERGY            =       -180.65366 EV
          ELECTRONIC ENERGY       =       -364.86434 EV
          CORE-CORE REPULSION     =        184.21068 EV

          IONIZATION POTENTIAL    =         12.79389 EV
          MOLECULAR WEIGHT        =         14.0266

";

fn geometry_block(rows: &[&str]) -> String {
    let mut out = String::from(
        "       ATOM   CHEMICAL          X               Y               Z\n      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)\n\n",
    );
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out.push_str("\n\n          CARTESIAN COORDINATES\n\n");
    out.push_str("   1    C        0.000000000     0.000000000     0.000000000\n\n\n");
    out
}

fn mulliken_block(rows: &[&str]) -> String {
    let mut out = String::from(
        "          MULLIKEN POPULATIONS AND CHARGES\n\n         NO.  ATOM   POPULATION      CHARGE\n",
    );
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out.push_str(" ***********************************************************************\n");
    out
}

/// Builds a complete output file with the final heat of formation marker.
pub fn mopac_output(geometry_rows: &[&str], charge_rows: Option<&[&str]>) -> String {
    let mut out = String::from(PREAMBLE);
    out.push_str(ENERGIES);
    out.push_str(&geometry_block(geometry_rows));
    if let Some(rows) = charge_rows {
        out.push_str(&mulliken_block(rows));
    }
    out.push_str("\n TOTAL JOB TIME:             0.02 SECONDS\n\n == MOPAC DONE ==\n");
    out
}

/// Builds an output file whose geometry can only be found by its column headers.
pub fn mopac_output_without_final_heat(geometry_rows: &[&str], charge_rows: &[&str]) -> String {
    let mut out = String::from(PREAMBLE);
    out.push_str(&geometry_block(geometry_rows));
    out.push_str(&mulliken_block(charge_rows));
    out
}
