//! Interactive ε-δ visualizer component.
//!
//! The component owns exactly one piece of state, ε. Each slider event is
//! handled synchronously: parse, sanitize, store, then recompute the whole
//! view with `epsdelta::compute`. δ and the samples are never stored.

use serde::Serialize;

use crate::chart::{ChartConfig, ChartError, Registry};
use crate::epsdelta::cfg::{DISPLAY_DECIMALS, LIMIT_VALUE};
use crate::epsdelta::{self, Tolerance, ToleranceError, View, EPSILON_SLIDER};

pub const HEADING: &str = "Visualizador Interactivo de la Definición ε-δ";

pub const CAPTION: &str = "¡Juega con el slider! Elige cualquier valor para ε (la tolerancia \
vertical en naranja 🟠). La aplicación encontrará un δ (la proximidad horizontal en azul 🔵) \
que garantiza que la función se mantiene dentro de esa tolerancia. ¡Esto demuestra que el \
límite existe!";

pub const EPSILON_LABEL: &str = "ε (tolerancia vertical):";
pub const DELTA_LABEL: &str = "δ calculado:";

/// Two-decimal rendering shared by every readout.
pub fn format_value(v: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, v)
}

/// `ε (tolerancia vertical): 1.00`
pub fn format_epsilon(eps: Tolerance) -> String {
    format!("{EPSILON_LABEL} {}", format_value(eps.get()))
}

/// `δ calculado: 0.24`; always the absolute value.
pub fn format_delta(delta: f64) -> String {
    format!("{DELTA_LABEL} {}", format_value(delta.abs()))
}

/// Text shown next to the chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub epsilon_label: String,
    pub delta_label: String,
}

/// Everything the rendering layer needs for one ε.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub epsilon: f64,
    pub delta: f64,
    pub readout: Readout,
    pub chart: ChartConfig,
}

/// Precomputed values for one slider position, looked up by the page script.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SliderRow {
    pub epsilon: f64,
    pub delta: f64,
    pub upper: f64,
    pub lower: f64,
    /// Readout texts without their labels (`1.00`, `0.24`).
    pub epsilon_text: String,
    pub delta_text: String,
}

/// One row per `EPSILON_SLIDER` position, in slider order.
pub fn slider_table() -> Vec<SliderRow> {
    let mut v = Visualizer::mount();
    EPSILON_SLIDER
        .positions()
        .into_iter()
        .filter_map(|e| Tolerance::new(e).ok())
        .map(|eps| {
            let view = v.set(eps);
            SliderRow {
                epsilon: view.epsilon,
                delta: view.delta,
                upper: LIMIT_VALUE + view.epsilon,
                lower: LIMIT_VALUE - view.epsilon,
                epsilon_text: format_value(view.epsilon),
                delta_text: format_value(view.delta.abs()),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Visualizer {
    epsilon: Tolerance,
}

impl Visualizer {
    /// Fresh component; ε starts at the slider's initial value.
    pub fn mount() -> Self {
        Self {
            epsilon: Tolerance::initial(),
        }
    }

    #[inline]
    pub fn epsilon(&self) -> Tolerance {
        self.epsilon
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        epsdelta::delta(self.epsilon)
    }

    pub fn view(&self) -> View {
        epsdelta::compute(self.epsilon)
    }

    pub fn set(&mut self, eps: Tolerance) -> View {
        self.epsilon = eps;
        self.view()
    }

    /// Handle one slider input event.
    ///
    /// Text that is not a number leaves ε unchanged.
    pub fn on_input(&mut self, text: &str) -> Result<View, ToleranceError> {
        let eps = Tolerance::from_slider_text(text)?;
        Ok(self.set(eps))
    }

    pub fn readout(&self) -> Readout {
        Readout {
            epsilon_label: format_epsilon(self.epsilon),
            delta_label: format_delta(self.delta()),
        }
    }

    pub fn frame(&self, registry: &Registry) -> Result<Frame, ChartError> {
        let view = self.view();
        let chart = ChartConfig::epsilon_delta(registry, &view.samples)?;
        Ok(Frame {
            epsilon: view.epsilon,
            delta: view.delta,
            readout: self.readout(),
            chart,
        })
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::mount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{self, ChartComponent, UPPER_LABEL};
    use proptest::prelude::*;

    #[test]
    fn mount_starts_at_one() {
        let v = Visualizer::mount();
        assert_eq!(v.epsilon().get(), 1.0);
        assert_eq!(v.readout().epsilon_label, "ε (tolerancia vertical): 1.00");
        assert_eq!(v.readout().delta_label, "δ calculado: 0.24");
    }

    #[test]
    fn readouts_for_slider_extremes() {
        let mut v = Visualizer::mount();
        v.on_input("0.1").unwrap();
        assert_eq!(v.readout().delta_label, "δ calculado: 0.02");
        assert_eq!(v.readout().epsilon_label, "ε (tolerancia vertical): 0.10");
        v.on_input("2").unwrap();
        assert_eq!(v.readout().delta_label, "δ calculado: 0.45");
        assert_eq!(format_delta(-0.236), "δ calculado: 0.24");
    }

    #[test]
    fn bad_input_keeps_state() {
        let mut v = Visualizer::mount();
        v.on_input("1.37").unwrap();
        assert!(v.on_input("").is_err());
        assert!(v.on_input("ε").is_err());
        assert_eq!(v.epsilon().get(), 1.37);
    }

    #[test]
    fn input_is_snapped_to_the_slider_grid() {
        let mut v = Visualizer::mount();
        let view = v.on_input("1.234").unwrap();
        assert_eq!(view.epsilon, 1.23);
        assert_eq!(v.on_input("7").unwrap().epsilon, 2.0);
    }

    #[test]
    fn remount_resets_epsilon() {
        let mut v = Visualizer::mount();
        v.on_input("0.5").unwrap();
        assert_eq!(v.epsilon().get(), 0.5);
        let v = Visualizer::mount();
        assert_eq!(v.epsilon(), Tolerance::initial());
    }

    #[test]
    fn frame_tracks_state() {
        let mut v = Visualizer::mount();
        v.on_input("1.5").unwrap();
        let frame = v.frame(chart::init()).unwrap();
        assert_eq!(frame.epsilon, 1.5);
        assert_eq!(frame.delta, (5.5f64).sqrt() - 2.0);
        assert_eq!(frame.chart.dataset(UPPER_LABEL).unwrap().data[42].y, 5.5);
        assert_eq!(frame.readout, v.readout());

        let empty = Registry::with([ChartComponent::Legend]);
        assert!(v.frame(&empty).is_err());
    }

    #[test]
    fn delta_readout_is_rounded_abs_at_every_position() {
        for e in EPSILON_SLIDER.positions() {
            let eps = Tolerance::new(e).unwrap();
            let expected = format!("δ calculado: {:.2}", ((4.0 + e).sqrt() - 2.0).abs());
            assert_eq!(format_delta(epsdelta::delta(eps)), expected, "ε = {e}");
            let mut v = Visualizer::mount();
            v.set(eps);
            assert_eq!(v.readout().delta_label, expected);
        }
    }

    #[test]
    fn slider_table_follows_compute() {
        let table = slider_table();
        assert_eq!(table.len(), 191);
        assert_eq!(table[0].epsilon, 0.1);
        assert_eq!(table[0].delta_text, "0.02");
        assert_eq!(table[90].epsilon_text, "1.00");
        assert_eq!(table[90].delta_text, "0.24");
        assert_eq!(table[190].delta_text, "0.45");
        for row in &table {
            let view = epsdelta::compute(Tolerance::new(row.epsilon).unwrap());
            assert_eq!(row.delta, view.delta);
            assert_eq!(row.upper, view.samples.upper[0]);
            assert_eq!(row.lower, view.samples.lower[0]);
        }
    }

    proptest! {
        #[test]
        fn slider_text_readout_matches_closed_form(v in 0.1f64..=2.0) {
            let mut vis = Visualizer::mount();
            let view = vis.on_input(&format!("{v}")).unwrap();
            let e = view.epsilon;
            prop_assert_eq!(
                vis.readout().delta_label,
                format!("δ calculado: {:.2}", ((4.0 + e).sqrt() - 2.0).abs())
            );
        }
    }
}
