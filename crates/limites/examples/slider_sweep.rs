//! Walk the ε slider in coarse steps and print what the page would show.
//!
//! Purpose
//! - Quick look at the readout and band values without a browser.
//! - Shows that the displayed δ equals the two-sided δ for `x²` at `a = 2`.

use limites::epsdelta::{two_sided_delta, EPSILON_SLIDER};
use limites::visualizer::Visualizer;

fn main() {
    let mut v = Visualizer::mount();
    println!("{}", v.readout().epsilon_label);
    for text in ["0.1", "0.25", "0.5", "1", "1.5", "2"] {
        let view = match v.on_input(text) {
            Ok(view) => view,
            Err(err) => {
                eprintln!("skipping {text}: {err}");
                continue;
            }
        };
        let readout = v.readout();
        println!(
            "{} | {} | bands=[{:.2}, {:.2}] two_sided={:.6}",
            readout.epsilon_label,
            readout.delta_label,
            view.samples.lower[0],
            view.samples.upper[0],
            two_sided_delta(v.epsilon()),
        );
    }
    println!("slider positions: {}", EPSILON_SLIDER.positions().len());
}
