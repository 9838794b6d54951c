/// A closed set of named options offered by a multi-choice prompt.
pub trait Choice: Copy + Sized + 'static {
    /// Every option, in the order it is listed to the operator.
    const ALL: &'static [Self];

    /// Name the operator types to pick this option.
    fn name(&self) -> &'static str;

    /// One-line explanation shown next to the name.
    fn description(&self) -> &'static str;

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.name()).collect()
    }

    /// Match an answer against the option names, ignoring case.
    fn find(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        Self::ALL.iter().copied().find(|choice| choice.name().eq_ignore_ascii_case(answer))
    }
}

/// Traffic Light Protocol marking attached to indicators shared with CIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLightProtocol {
    White,
    Green,
    Amber,
    Red,
}

impl Choice for TrafficLightProtocol {
    const ALL: &'static [Self] = &[
        TrafficLightProtocol::White,
        TrafficLightProtocol::Green,
        TrafficLightProtocol::Amber,
        TrafficLightProtocol::Red,
    ];

    fn name(&self) -> &'static str {
        match self {
            TrafficLightProtocol::White => "white",
            TrafficLightProtocol::Green => "green",
            TrafficLightProtocol::Amber => "amber",
            TrafficLightProtocol::Red => "red",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            TrafficLightProtocol::White => "Disclosure is not limited",
            TrafficLightProtocol::Green => "Limited disclosure, restricted to the community",
            TrafficLightProtocol::Amber => {
                "Limited disclosure, restricted to participants' organizations"
            }
            TrafficLightProtocol::Red => "Not for disclosure, restricted to participants only",
        }
    }
}
