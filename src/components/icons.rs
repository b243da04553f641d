//! Inline stroke icon set. Each icon is a handful of SVG paths drawn with
//! `currentColor`, so color follows the surrounding text.

use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    CheckCircle,
    Menu,
    Close,
    Search,
    Cpu,
    BarChart,
    Globe,
    ChevronLeft,
    ChevronRight,
    TrendingUp,
    Target,
    AlertTriangle,
    Activity,
    PieChart,
    Quote,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Search => &["M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16", "m21 21-4.3-4.3"],
            Icon::Cpu => &[
                "M4 4h16v16H4z",
                "M9 9h6v6H9z",
                "M9 2v2",
                "M15 2v2",
                "M9 20v2",
                "M15 20v2",
                "M2 9h2",
                "M2 15h2",
                "M20 9h2",
                "M20 15h2",
            ],
            Icon::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Icon::ChevronLeft => &["m15 18-6-6 6-6"],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Icon::Target => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20",
                "M12 6a6 6 0 1 0 0 12 6 6 0 0 0 0-12",
                "M12 10a2 2 0 1 0 0 4 2 2 0 0 0 0-4",
            ],
            Icon::AlertTriangle => &[
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z",
                "M12 9v4",
                "M12 17h.01",
            ],
            Icon::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Icon::PieChart => &["M21.21 15.89A10 10 0 1 1 8 2.83", "M22 12A10 10 0 0 0 12 2v10z"],
            Icon::Quote => &[
                "M10 11H6a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2v7a4 4 0 0 1-4 4",
                "M20 11h-4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2v7a4 4 0 0 1-4 4",
            ],
        }
    }

    pub fn render(self, size: u32) -> Html {
        let size = size.to_string();
        html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width={size.clone()}
                height={size}
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { for self.paths().iter().map(|d| html! { <path d={*d} /> }) }
            </svg>
        }
    }
}
