use yew::prelude::*;

pub const LARGE_TICKS: usize = 5;
pub const TICKS_BETWEEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Large,
    Medium,
    Small,
}

impl Tick {
    fn height_class(self) -> &'static str {
        match self {
            Tick::Large => "h-8",
            Tick::Medium => "h-6",
            Tick::Small => "h-4",
        }
    }
}

/// Ruler marks: `large` major ticks with `between` minor ticks in each gap.
/// When `between` is even, the tick just before the middle of a gap is
/// drawn medium.
pub fn ticks(large: usize, between: usize) -> Vec<Tick> {
    let medium_at = if between % 2 == 0 {
        (between / 2).checked_sub(1)
    } else {
        None
    };
    let mut out = Vec::with_capacity(large + large.saturating_sub(1) * between);
    for i in 0..large {
        out.push(Tick::Large);
        if i + 1 < large {
            out.extend((0..between).map(|j| {
                if Some(j) == medium_at {
                    Tick::Medium
                } else {
                    Tick::Small
                }
            }));
        }
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct AxisProps {
    pub label: AttrValue,
}

#[function_component(DetailedAxis)]
pub fn detailed_axis(props: &AxisProps) -> Html {
    html! {
        <div class="bg-blue-900 p-8 w-full">
            <div class="relative h-24 flex items-end justify-between">
                <div class="absolute top-[16px] left-0 w-[22%] h-20 bg-white/30 flex items-center justify-center">
                    <p class="text-white font-bold text-xl">{ &props.label }</p>
                </div>
                <div class="absolute bottom-0 left-0 right-0 h-[2px] bg-white" />
                {
                    ticks(LARGE_TICKS, TICKS_BETWEEN).into_iter().enumerate().map(|(index, tick)| html! {
                        <div key={index} class={classes!("w-0.5", tick.height_class(), "bg-white")}></div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ruler() {
        let marks = ticks(LARGE_TICKS, TICKS_BETWEEN);
        assert_eq!(marks.len(), 37);
        assert_eq!(marks.iter().filter(|t| **t == Tick::Large).count(), 5);
        assert_eq!(marks.iter().filter(|t| **t == Tick::Medium).count(), 4);
        assert_eq!(marks[0], Tick::Large);
        assert_eq!(marks[4], Tick::Medium);
        assert_eq!(marks[9], Tick::Large);
        assert_eq!(marks[36], Tick::Large);
    }

    #[test]
    fn test_odd_gap_has_no_medium_tick() {
        let marks = ticks(3, 3);
        assert_eq!(marks.len(), 9);
        assert!(!marks.contains(&Tick::Medium));
    }

    #[test]
    fn test_degenerate_rulers() {
        assert!(ticks(0, 8).is_empty());
        assert_eq!(ticks(1, 8), vec![Tick::Large]);
        assert_eq!(ticks(3, 0), vec![Tick::Large; 3]);
        assert_eq!(ticks(2, 2), vec![Tick::Large, Tick::Medium, Tick::Small, Tick::Large]);
    }
}
