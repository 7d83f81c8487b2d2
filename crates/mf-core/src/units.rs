// mf-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};
use uom::si::ratio::{per_mille, percent, ratio};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn hpa(v: f64) -> Pressure {
    use uom::si::pressure::hectopascal;
    Pressure::new::<hectopascal>(v)
}

/// Millibar; identical to hectopascal.
#[inline]
pub fn mb(v: f64) -> Pressure {
    hpa(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    Ratio::new::<ratio>(v)
}

/// Read-out helpers in the units the Bolton fits are calibrated for.
#[inline]
pub fn to_hpa(p: Pressure) -> f64 {
    use uom::si::pressure::hectopascal;
    p.get::<hectopascal>()
}

#[inline]
pub fn to_degc(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[inline]
pub fn to_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// Mass of water vapor per unit mass of dry air.
///
/// The Bolton fits mix kg/kg and g/kg within a single formula. Carrying the
/// value as a dimensionless `Ratio` means each formula reads out the unit it
/// was calibrated for and callers never convert by hand.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixingRatio(Ratio);

impl MixingRatio {
    #[inline]
    pub fn from_kg_per_kg(v: f64) -> Self {
        Self(Ratio::new::<ratio>(v))
    }

    #[inline]
    pub fn from_g_per_kg(v: f64) -> Self {
        Self(Ratio::new::<per_mille>(v))
    }

    #[inline]
    pub fn kg_per_kg(self) -> f64 {
        self.0.get::<ratio>()
    }

    #[inline]
    pub fn g_per_kg(self) -> f64 {
        self.0.get::<per_mille>()
    }

    #[inline]
    pub fn into_inner(self) -> Ratio {
        self.0
    }
}

impl From<Ratio> for MixingRatio {
    fn from(r: Ratio) -> Self {
        Self(r)
    }
}

/// Ratio of actual to saturation vapor pressure.
///
/// Values above 100 % are representable; they describe supersaturated input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeHumidity(Ratio);

impl RelativeHumidity {
    #[inline]
    pub fn from_percent(v: f64) -> Self {
        Self(Ratio::new::<percent>(v))
    }

    #[inline]
    pub fn from_fraction(v: f64) -> Self {
        Self(Ratio::new::<ratio>(v))
    }

    #[inline]
    pub fn percent(self) -> f64 {
        self.0.get::<percent>()
    }

    #[inline]
    pub fn fraction(self) -> f64 {
        self.0.get::<ratio>()
    }

    #[inline]
    pub fn into_inner(self) -> Ratio {
        self.0
    }
}

/// Standard reference pressure for potential temperatures (1000 mb).
#[inline]
pub fn reference_pressure() -> Pressure {
    hpa(crate::constants::REFERENCE_PRESSURE_HPA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _r = unitless(0.5);
        let _p0 = reference_pressure();
    }

    #[test]
    fn millibar_is_hectopascal() {
        assert!((to_hpa(mb(850.0)) - 850.0).abs() < 1e-9);
        assert!((to_hpa(pa(85_000.0)) - 850.0).abs() < 1e-9);
    }

    #[test]
    fn celsius_and_kelvin_agree() {
        assert!((to_k(degc(25.0)) - 298.15).abs() < 1e-9);
        assert!((to_degc(k(273.15))).abs() < 1e-9);
    }

    #[test]
    fn mixing_ratio_carries_its_unit() {
        let w = MixingRatio::from_g_per_kg(12.0);
        assert!((w.kg_per_kg() - 0.012).abs() < 1e-15);

        let w = MixingRatio::from_kg_per_kg(0.012);
        assert!((w.g_per_kg() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn relative_humidity_percent_and_fraction() {
        let rh = RelativeHumidity::from_percent(59.8);
        assert!((rh.fraction() - 0.598).abs() < 1e-12);
        assert!((RelativeHumidity::from_fraction(1.2).percent() - 120.0).abs() < 1e-9);
    }
}
