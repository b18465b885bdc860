use crate::components::icons::Icon;

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Impact", href: "#impact" },
    NavItem { label: "Download", href: "#download" },
    NavItem { label: "Contact", href: "#contact" },
];

/// A big number with a caption, used by the hero and the impact card.
pub struct Figure {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_FIGURES: &[Figure] = &[
    Figure { value: "500+", label: "Volunteers" },
    Figure { value: "50+", label: "NGOs" },
    Figure { value: "1000+", label: "Hours Given" },
];

pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub static PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: 1,
        title: "Discover",
        description: "Find local volunteering opportunities, NGO events, and community needs near you with smart geo-search.",
        icon: Icon::Search,
    },
    ProcessStep {
        number: 2,
        title: "Verify Impact",
        description: "Check-in with GPS, upload photos, and log beneficiary counts. Build trust with verified contributions.",
        icon: Icon::Shield,
    },
    ProcessStep {
        number: 3,
        title: "Earn Karma",
        description: "Accumulate karma points, unlock badges, and build a downloadable impact resume showcasing your journey.",
        icon: Icon::Money,
    },
];

pub struct ImpactMetric {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub static IMPACT_METRICS: &[ImpactMetric] = &[
    ImpactMetric {
        label: "Increase Participation",
        description: "Connect more volunteers with local opportunities through geo-discovery.",
        icon: Icon::Group,
    },
    ImpactMetric {
        label: "Increase Trust",
        description: "Build credibility through verified reporting and transparent impact logs.",
        icon: Icon::Shield,
    },
    ImpactMetric {
        label: "Reduce Admin Overhead",
        description: "Streamline NGO operations with automated event management and reporting.",
        icon: Icon::Lightning,
    },
    ImpactMetric {
        label: "Strengthen Community",
        description: "Foster stronger community bonds through local engagement and storytelling.",
        icon: Icon::Heart,
    },
];

pub static IMPACT_HEADLINE: Figure = Figure {
    value: "4x",
    label: "More Community Engagement",
};

pub static IMPACT_FIGURES: &[Figure] = &[
    Figure { value: "85%", label: "Volunteer Retention" },
    Figure { value: "60%", label: "Less Admin Work" },
    Figure { value: "95%", label: "Trust Score" },
    Figure { value: "3x", label: "Impact Visibility" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoadmapStatus {
    Completed,
    InProgress,
    Planned,
}

impl RoadmapStatus {
    pub fn label(self) -> &'static str {
        match self {
            RoadmapStatus::Completed => "Done",
            RoadmapStatus::InProgress => "Building",
            RoadmapStatus::Planned => "Planned",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RoadmapStatus::Completed => "status-done",
            RoadmapStatus::InProgress => "status-building",
            RoadmapStatus::Planned => "status-planned",
        }
    }
}

pub struct RoadmapItem {
    pub title: &'static str,
    pub description: &'static str,
    pub status: RoadmapStatus,
    pub icon: Icon,
}

pub static ROADMAP: &[RoadmapItem] = &[
    RoadmapItem {
        title: "NLP Matching",
        description: "AI-powered matching of volunteers to opportunities based on skills and preferences.",
        status: RoadmapStatus::Planned,
        icon: Icon::Bulb,
    },
    RoadmapItem {
        title: "Volunteer Ride-Share",
        description: "Coordinate transportation for volunteers heading to the same events.",
        status: RoadmapStatus::Planned,
        icon: Icon::Exchange,
    },
    RoadmapItem {
        title: "Emergency Alert Mode",
        description: "Rapid mobilization of volunteers during natural disasters or emergencies.",
        status: RoadmapStatus::Planned,
        icon: Icon::Bell,
    },
    RoadmapItem {
        title: "AI Report Generators",
        description: "Automated impact reports and analytics powered by artificial intelligence.",
        status: RoadmapStatus::Planned,
        icon: Icon::Report,
    },
];

pub struct TechItem {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub static TECH_STACK: &[TechItem] = &[
    TechItem {
        name: "React + Tailwind",
        description: "Modern, responsive frontend",
        icon: Icon::Atom,
    },
    TechItem {
        name: "Django REST / FastAPI",
        description: "Robust Python backend",
        icon: Icon::Layers,
    },
    TechItem {
        name: "OpenStreetMap",
        description: "Open-source mapping",
        icon: Icon::Map,
    },
    TechItem {
        name: "PostgreSQL",
        description: "Production database",
        icon: Icon::Database,
    },
];

pub static TRUST_BADGES: &[(Icon, &str)] = &[
    (Icon::ShieldSolid, "Secure & Verified"),
    (Icon::CodeSolid, "Open Source Friendly"),
    (Icon::BoltSolid, "Lightning Fast"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_are_in_page_anchors() {
        for item in NAV_ITEMS {
            assert!(item.href.starts_with('#'), "{} is not an anchor", item.label);
        }
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let numbers: Vec<u8> = PROCESS_STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn roadmap_status_labels() {
        assert_eq!(RoadmapStatus::Completed.label(), "Done");
        assert_eq!(RoadmapStatus::InProgress.label(), "Building");
        assert!(ROADMAP.iter().all(|item| item.status == RoadmapStatus::Planned));
    }
}
