//! Element-wise evaluation over arrays of inputs.
//!
//! Every formula is scalar; fields apply it element by element with numpy
//! style broadcasting of uniform operands. Large fields are split across
//! the rayon pool. Results keep input order and do not depend on whether
//! the evaluation ran in parallel.

use crate::config::ThermoConfig;
use crate::equivalent::{
    pseudo_equivalent_potential_temperature_with_reference,
    saturated_pseudo_equivalent_potential_temperature_with_reference,
};
use crate::error::{ThermoError, ThermoResult};
use crate::humidity::{lcl_temperature, relative_humidity};
use crate::mixing::{mixing_ratio_line, saturation_mixing_ratio};
use crate::potential::{dry_potential_temperature_with_reference, potential_temperature};
use crate::vapor::{saturation_vapor_pressure, saturation_vapor_temperature};
use mf_core::units::{MixingRatio, Pressure, RelativeHumidity, Temperature};
use rayon::prelude::*;
use tracing::debug;

/// One input of a field operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    /// Same value for every element.
    Uniform(T),
    /// One value per element.
    Values(&'a [T]),
}

impl<'a, T: Copy> Operand<'a, T> {
    /// Number of elements, or `None` for a broadcast value.
    pub fn len(&self) -> Option<usize> {
        match self {
            Operand::Uniform(_) => None,
            Operand::Values(v) => Some(v.len()),
        }
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        match self {
            Operand::Uniform(v) => *v,
            Operand::Values(v) => v[index],
        }
    }
}

impl<'a, T> From<&'a [T]> for Operand<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Operand::Values(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for Operand<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Operand::Values(values.as_slice())
    }
}

/// Common length of a set of operands; uniform-only sets have length 1.
pub fn broadcast_len(lens: &[Option<usize>]) -> ThermoResult<usize> {
    let mut expected: Option<usize> = None;
    for len in lens.iter().flatten() {
        match expected {
            None => expected = Some(*len),
            Some(e) if e != *len => {
                return Err(ThermoError::ShapeMismatch {
                    expected: e,
                    found: *len,
                });
            }
            Some(_) => {}
        }
    }
    Ok(expected.unwrap_or(1))
}

/// Applies scalar formulas across fields.
#[derive(Debug, Clone, Default)]
pub struct FieldEvaluator {
    config: ThermoConfig,
}

impl FieldEvaluator {
    pub fn new(config: ThermoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThermoConfig {
        &self.config
    }

    /// Evaluates `f` for indices `0..len`; the lowest failing index is reported.
    fn run<O, F>(&self, len: usize, f: F) -> ThermoResult<Vec<O>>
    where
        O: Send,
        F: Fn(usize) -> ThermoResult<O> + Sync + Send,
    {
        let wrap = |index: usize| {
            f(index).map_err(|e| ThermoError::Element {
                index,
                source: Box::new(e),
            })
        };

        if len >= self.config.parallel_threshold {
            debug!(len, "evaluating field in parallel");
            let results: Vec<ThermoResult<O>> = (0..len).into_par_iter().map(wrap).collect();
            results.into_iter().collect()
        } else {
            (0..len).map(wrap).collect()
        }
    }

    pub fn map<A, O, F>(&self, a: Operand<'_, A>, f: F) -> ThermoResult<Vec<O>>
    where
        A: Copy + Sync,
        O: Send,
        F: Fn(A) -> ThermoResult<O> + Sync + Send,
    {
        let len = broadcast_len(&[a.len()])?;
        self.run(len, |i| f(a.at(i)))
    }

    pub fn zip2<A, B, O, F>(
        &self,
        a: Operand<'_, A>,
        b: Operand<'_, B>,
        f: F,
    ) -> ThermoResult<Vec<O>>
    where
        A: Copy + Sync,
        B: Copy + Sync,
        O: Send,
        F: Fn(A, B) -> ThermoResult<O> + Sync + Send,
    {
        let len = broadcast_len(&[a.len(), b.len()])?;
        self.run(len, |i| f(a.at(i), b.at(i)))
    }

    pub fn zip3<A, B, C, O, F>(
        &self,
        a: Operand<'_, A>,
        b: Operand<'_, B>,
        c: Operand<'_, C>,
        f: F,
    ) -> ThermoResult<Vec<O>>
    where
        A: Copy + Sync,
        B: Copy + Sync,
        C: Copy + Sync,
        O: Send,
        F: Fn(A, B, C) -> ThermoResult<O> + Sync + Send,
    {
        let len = broadcast_len(&[a.len(), b.len(), c.len()])?;
        self.run(len, |i| f(a.at(i), b.at(i), c.at(i)))
    }

    // Named field forms of the formula chain. Operands given as `impl Into`
    // accept slices, vectors, or an explicit `Operand::Uniform`.

    pub fn saturation_vapor_pressure<'a>(
        &self,
        t: impl Into<Operand<'a, Temperature>>,
    ) -> ThermoResult<Vec<Pressure>> {
        self.map(t.into(), saturation_vapor_pressure)
    }

    pub fn saturation_vapor_temperature<'a>(
        &self,
        e_s: impl Into<Operand<'a, Pressure>>,
    ) -> ThermoResult<Vec<Temperature>> {
        self.map(e_s.into(), saturation_vapor_temperature)
    }

    pub fn saturation_mixing_ratio<'a>(
        &self,
        p: impl Into<Operand<'a, Pressure>>,
        t: impl Into<Operand<'a, Temperature>>,
    ) -> ThermoResult<Vec<MixingRatio>> {
        self.zip2(p.into(), t.into(), saturation_mixing_ratio)
    }

    pub fn mixing_ratio_line<'a>(
        &self,
        p: impl Into<Operand<'a, Pressure>>,
        w_s: impl Into<Operand<'a, MixingRatio>>,
    ) -> ThermoResult<Vec<Temperature>> {
        self.zip2(p.into(), w_s.into(), mixing_ratio_line)
    }

    pub fn relative_humidity<'a>(
        &self,
        t: impl Into<Operand<'a, Temperature>>,
        p: impl Into<Operand<'a, Pressure>>,
        w: impl Into<Operand<'a, MixingRatio>>,
    ) -> ThermoResult<Vec<RelativeHumidity>> {
        self.zip3(t.into(), p.into(), w.into(), relative_humidity)
    }

    pub fn lcl_temperature<'a>(
        &self,
        t: impl Into<Operand<'a, Temperature>>,
        rh: impl Into<Operand<'a, RelativeHumidity>>,
    ) -> ThermoResult<Vec<Temperature>> {
        self.zip2(t.into(), rh.into(), lcl_temperature)
    }

    pub fn potential_temperature<'a>(
        &self,
        t: impl Into<Operand<'a, Temperature>>,
        p: impl Into<Operand<'a, Pressure>>,
    ) -> ThermoResult<Vec<Temperature>> {
        self.zip2(t.into(), p.into(), potential_temperature)
    }

    /// Dry potential temperature against the configured reference pressure.
    pub fn dry_potential_temperature<'a>(
        &self,
        theta: impl Into<Operand<'a, Temperature>>,
        p: impl Into<Operand<'a, Pressure>>,
    ) -> ThermoResult<Vec<Temperature>> {
        let p0 = self.config.reference_pressure();
        self.zip2(theta.into(), p.into(), |theta, p| {
            dry_potential_temperature_with_reference(theta, p, p0)
        })
    }

    /// Pseudo-equivalent potential temperature against the configured reference pressure.
    pub fn pseudo_equivalent_potential_temperature<'a>(
        &self,
        t: impl Into<Operand<'a, Temperature>>,
        p: impl Into<Operand<'a, Pressure>>,
        w: impl Into<Operand<'a, MixingRatio>>,
    ) -> ThermoResult<Vec<Temperature>> {
        let p0 = self.config.reference_pressure();
        self.zip3(t.into(), p.into(), w.into(), |t, p, w| {
            pseudo_equivalent_potential_temperature_with_reference(t, p, w, p0)
        })
    }

    /// Saturated θ_ep field against the configured reference pressure.
    pub fn saturated_theta_ep<'a>(
        &self,
        t: impl Into<Operand<'a, Temperature>>,
        p: impl Into<Operand<'a, Pressure>>,
    ) -> ThermoResult<Vec<Temperature>> {
        let p0 = self.config.reference_pressure();
        self.zip2(t.into(), p.into(), |t, p| {
            saturated_pseudo_equivalent_potential_temperature_with_reference(t, p, p0)
        })
    }
}

/// Saturated pseudo-equivalent potential temperature for every (T, p) pair.
///
/// Either operand may be uniform, e.g. a temperature column on one pressure
/// level.
pub fn saturated_theta_ep_field(
    t: Operand<'_, Temperature>,
    p: Operand<'_, Pressure>,
    p0: Pressure,
) -> ThermoResult<Vec<Temperature>> {
    FieldEvaluator::default().zip2(t, p, |t, p| {
        saturated_pseudo_equivalent_potential_temperature_with_reference(t, p, p0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalent::saturated_pseudo_equivalent_potential_temperature;
    use mf_core::units::{degc, mb, reference_pressure, to_hpa, to_k};

    fn parallel_evaluator() -> FieldEvaluator {
        FieldEvaluator::new(ThermoConfig {
            parallel_threshold: 1,
            ..ThermoConfig::default()
        })
    }

    #[test]
    fn broadcast_rules() {
        assert_eq!(broadcast_len(&[None, None]).unwrap(), 1);
        assert_eq!(broadcast_len(&[Some(4), None]).unwrap(), 4);
        assert_eq!(broadcast_len(&[Some(4), Some(4), None]).unwrap(), 4);
        assert!(matches!(
            broadcast_len(&[Some(4), Some(3)]),
            Err(ThermoError::ShapeMismatch {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn empty_field_is_empty() {
        let temps: Vec<Temperature> = Vec::new();
        let out = FieldEvaluator::default()
            .saturation_vapor_pressure(&temps)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn uniform_pressure_broadcasts_over_temperatures() {
        let temps = [degc(-10.0), degc(0.0), degc(10.0)];
        let out = FieldEvaluator::default()
            .saturation_mixing_ratio(Operand::Uniform(mb(850.0)), &temps[..])
            .unwrap();
        assert_eq!(out.len(), 3);
        assert!(out[0] < out[1] && out[1] < out[2]);
    }

    #[test]
    fn field_matches_scalar_evaluation() {
        let temps: Vec<Temperature> = (-30..=30).map(|c| degc(c as f64)).collect();
        let pressures: Vec<Pressure> = (0..temps.len())
            .map(|i| mb(1000.0 - 5.0 * i as f64))
            .collect();

        let field = saturated_theta_ep_field(
            Operand::Values(&temps),
            Operand::Values(&pressures),
            reference_pressure(),
        )
        .unwrap();

        for ((t, p), theta_ep) in temps.iter().zip(&pressures).zip(&field) {
            let scalar = saturated_pseudo_equivalent_potential_temperature(*t, *p).unwrap();
            assert_eq!(to_k(scalar), to_k(*theta_ep));
        }
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let temps: Vec<Temperature> = (0..200).map(|i| degc(-40.0 + 0.4 * i as f64)).collect();
        let seq = FieldEvaluator::default()
            .saturated_theta_ep(&temps, Operand::Uniform(mb(900.0)))
            .unwrap();
        let par = parallel_evaluator()
            .saturated_theta_ep(&temps, Operand::Uniform(mb(900.0)))
            .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let temps = [degc(0.0), degc(5.0)];
        let pressures = [mb(1000.0), mb(900.0), mb(800.0)];
        let err = FieldEvaluator::default()
            .potential_temperature(&temps[..], &pressures[..])
            .unwrap_err();
        assert!(matches!(err, ThermoError::ShapeMismatch { .. }));
    }

    #[test]
    fn first_failing_element_is_reported() {
        let pressures = [mb(1000.0), mb(0.0), mb(-5.0)];
        for evaluator in [FieldEvaluator::default(), parallel_evaluator()] {
            let err = evaluator
                .potential_temperature(Operand::Uniform(degc(10.0)), &pressures[..])
                .unwrap_err();
            match err {
                ThermoError::Element { index, source } => {
                    assert_eq!(index, 1);
                    assert!(matches!(*source, ThermoError::Domain { .. }));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn configured_reference_pressure_is_used() {
        let evaluator = FieldEvaluator::new(ThermoConfig {
            reference_pressure_hpa: 850.0,
            ..ThermoConfig::default()
        });
        let out = evaluator
            .dry_potential_temperature(Operand::Uniform(mf_core::units::k(300.0)), &[mb(850.0)][..])
            .unwrap();
        assert_eq!(to_k(out[0]), 300.0);
        assert_eq!(to_hpa(evaluator.config().reference_pressure()), 850.0);
    }

    #[test]
    fn humidity_chain_over_a_column() {
        let evaluator = FieldEvaluator::default();
        let temps = [degc(25.0), degc(15.0), degc(5.0)];
        let pressures = [mb(1000.0), mb(850.0), mb(700.0)];
        let w = [
            MixingRatio::from_g_per_kg(12.0),
            MixingRatio::from_g_per_kg(8.0),
            MixingRatio::from_g_per_kg(4.0),
        ];
        let rh = evaluator
            .relative_humidity(&temps[..], &pressures[..], &w[..])
            .unwrap();
        let column: Vec<Temperature> = temps.to_vec();
        let t_lcl = evaluator.lcl_temperature(&column, &rh).unwrap();
        for (t, lcl) in temps.iter().zip(&t_lcl) {
            assert!(to_k(*lcl) <= to_k(*t));
        }
        let theta_ep = evaluator
            .pseudo_equivalent_potential_temperature(&temps[..], &pressures[..], &w[..])
            .unwrap();
        assert_eq!(theta_ep.len(), 3);
    }

    #[test]
    fn mixing_ratio_lines_and_inverse_fit() {
        let evaluator = FieldEvaluator::default();
        let pressures = [mb(1000.0), mb(700.0), mb(500.0)];
        let t = evaluator
            .mixing_ratio_line(&pressures[..], Operand::Uniform(MixingRatio::from_g_per_kg(4.0)))
            .unwrap();
        assert!(to_k(t[0]) > to_k(t[1]) && to_k(t[1]) > to_k(t[2]));

        let e_s = evaluator.saturation_vapor_pressure(&t).unwrap();
        let back = evaluator.saturation_vapor_temperature(&e_s).unwrap();
        for (a, b) in t.iter().zip(&back) {
            assert!((to_k(*a) - to_k(*b)).abs() < 0.1);
        }
    }
}
