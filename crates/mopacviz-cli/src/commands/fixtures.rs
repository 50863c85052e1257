//! MOPAC output shared by the command tests.

pub const WATER_OUTPUT: &str = "\
          FINAL HEAT OF FORMATION =        -12.15120 KCAL/MOL

       ATOM   CHEMICAL          X               Y               Z
      NUMBER    SYMBOL      (ANGSTROMS)     (ANGSTROMS)     (ANGSTROMS)

         1         O          0.00000000  *   0.00000000  *   0.11730000  *
         2         H          0.00000000  *   0.75720000  *  -0.46920000  *
         3         H          0.00000000  *  -0.75720000  *  -0.46920000  *


          CARTESIAN COORDINATES

          MULLIKEN POPULATIONS AND CHARGES

         NO.  ATOM   POPULATION      CHARGE
          1    O       6.6400        -0.6400
          2    H       0.6800         0.3200
          3    H       0.6800         0.3200
 ***********************************************************************
";
