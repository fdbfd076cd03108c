use crate::game::constants::MAX_POINTS;
use crate::game::numbers::round_f64_to_i32;
use yew::prelude::*;

fn blend_channel(from: i32, to: i32, t: f64) -> i32 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    round_f64_to_i32(value.floor())
}

/// CSS color for one per-question score: grey at 0 points shading
/// linearly to green at the maximum.
#[must_use]
pub fn score_color(score: i32) -> String {
    let t = f64::from(score.clamp(0, MAX_POINTS)) / f64::from(MAX_POINTS);
    let r = blend_channel(50, 0, t);
    let g = blend_channel(50, 128, t);
    let b = blend_channel(50, 0, t);
    format!("rgb({r}, {g}, {b})")
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub points: i32,
}

#[function_component(ScoreBubble)]
pub fn score_bubble(p: &Props) -> Html {
    let style = format!("background-color: {}", score_color(p.points));
    html! {
        <span class="score-bubble" {style}>{ p.points }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn score_color_endpoints() {
        assert_eq!(score_color(0), "rgb(50, 50, 50)");
        assert_eq!(score_color(MAX_POINTS), "rgb(0, 128, 0)");
    }

    #[test]
    fn score_color_midpoint_floors() {
        assert_eq!(score_color(500), "rgb(25, 89, 25)");
    }

    #[test]
    fn score_color_clamps_out_of_range() {
        assert_eq!(score_color(-40), score_color(0));
        assert_eq!(score_color(5_000), score_color(MAX_POINTS));
    }

    #[test]
    fn bubble_renders_points_and_color() {
        let props = Props { points: 800 };
        let html = block_on(LocalServerRenderer::<ScoreBubble>::with_props(props).render());
        assert!(html.contains("800"));
        assert!(html.contains("background-color: rgb("));
    }
}
