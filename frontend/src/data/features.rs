//! Feature records behind `/features/:slug`, plus the landing grid cards
//! that link to them.

use crate::components::icons::Icon;

#[derive(Debug, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Advantage {
    pub title: &'static str,
    pub description: &'static str,
    /// Looked up with [`Icon::from_name`].
    pub icon: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ImpactStat {
    pub stat: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub icon: &'static str,
    pub steps: &'static [Step],
    pub advantages: &'static [Advantage],
    pub impact: &'static [ImpactStat],
}

#[derive(Debug, PartialEq)]
pub struct FeatureCard {
    pub slug: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn feature_by_slug(slug: &str) -> Option<&'static Feature> {
    FEATURES.iter().find(|feature| feature.id == slug)
}

pub static FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        slug: "local-discovery",
        icon: Icon::Location,
        title: "Smart Local Discovery",
        description: "Find nearby opportunities using geo-radius and preferences. Geo-spatial search filters help you discover local volunteering events.",
    },
    FeatureCard {
        slug: "verification",
        icon: Icon::Verified,
        title: "Impact Verification Dashboard",
        description: "Verified event logs with photos, geolocation check-ins and beneficiary counts for complete transparency.",
    },
    FeatureCard {
        slug: "skillmatch",
        icon: Icon::Lightning,
        title: "SkillMatch & Micro-Volunteering",
        description: "Skill-based micro-tasks for busy contributors. Match your expertise with organizations that need it most.",
    },
    FeatureCard {
        slug: "resource-exchange",
        icon: Icon::Exchange,
        title: "Resource Exchange Board",
        description: "Request and fulfill non-monetary items. Donate supplies or fulfill needs posted by local organizations.",
    },
    FeatureCard {
        slug: "karma-points",
        icon: Icon::Star,
        title: "Karma Points & Impact Resume",
        description: "Earn points for verified contributions and generate a downloadable PDF resume of your impact hours.",
    },
    FeatureCard {
        slug: "story-capsules",
        icon: Icon::Capsule,
        title: "Story Capsules",
        description: "Share success stories and updates to retain emotional engagement. Narrative updates and beneficiary stories.",
    },
];

pub static FEATURES: &[Feature] = &[
    Feature {
        id: "local-discovery",
        title: "Smart Local Discovery",
        tagline: "Find opportunities near you",
        description: "Daanveer uses smart geo-spatial technology to connect you with volunteering opportunities in your neighborhood. No more scrolling through irrelevant listings. Find events, drives, and community initiatives within your preferred radius.",
        image: "/features/local-discovery.png",
        icon: "location",
        steps: &[
            Step {
                title: "Enable Location",
                description: "Allow Daanveer to access your location or manually enter your area to start discovering opportunities nearby.",
            },
            Step {
                title: "Set Your Radius",
                description: "Choose how far you're willing to travel, from 1km to 50km. The app filters opportunities within your comfort zone.",
            },
            Step {
                title: "Browse & Filter",
                description: "Explore opportunities on an interactive map or list view. Filter by cause, date, time commitment, and skills needed.",
            },
            Step {
                title: "Get Notified",
                description: "Receive alerts when new opportunities matching your preferences become available in your area.",
            },
        ],
        advantages: &[
            Advantage {
                title: "Save Time",
                description: "No more searching through city-wide listings. See only what's relevant to your location.",
                icon: "clock",
            },
            Advantage {
                title: "Reduce Travel",
                description: "Minimize commute time and carbon footprint by volunteering closer to home.",
                icon: "car",
            },
            Advantage {
                title: "Build Local Connections",
                description: "Meet neighbors and strengthen community bonds through local engagement.",
                icon: "community",
            },
            Advantage {
                title: "Real-Time Updates",
                description: "See live event availability, participant counts, and last-minute opportunities.",
                icon: "refresh",
            },
        ],
        impact: &[
            ImpactStat {
                stat: "3x",
                description: "More volunteers attend events when they're within 5km",
            },
            ImpactStat {
                stat: "40%",
                description: "Higher retention for locally-engaged volunteers",
            },
            ImpactStat {
                stat: "15min",
                description: "Average travel time to volunteer events",
            },
        ],
    },
    Feature {
        id: "verification",
        title: "Impact Verification Dashboard",
        tagline: "Transparent & trusted contributions",
        description: "Build credibility with verified, transparent reporting. Every volunteer hour is validated through GPS check-ins, photo uploads, and beneficiary counts, creating an immutable record of your community impact.",
        image: "/features/verification.png",
        icon: "shield",
        steps: &[
            Step {
                title: "Check-In on Arrival",
                description: "When you arrive at an event, check in using GPS verification. The app confirms you're at the right location.",
            },
            Step {
                title: "Document Your Work",
                description: "Take photos during the event to capture moments and provide visual proof of participation.",
            },
            Step {
                title: "Log Impact Metrics",
                description: "Record the number of beneficiaries helped, items distributed, or hours contributed.",
            },
            Step {
                title: "Get Verified Badge",
                description: "Once the NGO confirms your participation, receive a verified badge on your profile.",
            },
        ],
        advantages: &[
            Advantage {
                title: "Build Trust",
                description: "Verified contributions carry weight. Employers and institutions recognize authentic impact.",
                icon: "badge",
            },
            Advantage {
                title: "Prevent Fraud",
                description: "GPS + photo verification eliminates false claims and maintains platform integrity.",
                icon: "shield",
            },
            Advantage {
                title: "Transparent Reporting",
                description: "NGOs get accurate data for donor reports. Volunteers get proof of service.",
                icon: "chart",
            },
            Advantage {
                title: "Immutable Records",
                description: "Your verified contributions are permanently recorded and can be exported anytime.",
                icon: "database",
            },
        ],
        impact: &[
            ImpactStat {
                stat: "95%",
                description: "Trust score among verified volunteer records",
            },
            ImpactStat {
                stat: "80%",
                description: "Reduction in fraudulent volunteer claims",
            },
            ImpactStat {
                stat: "2x",
                description: "Faster NGO reporting with auto-generated logs",
            },
        ],
    },
    Feature {
        id: "skillmatch",
        title: "SkillMatch & Micro-Volunteering",
        tagline: "Your skills where they matter most",
        description: "Not everyone can commit full days. SkillMatch connects your unique abilities with organizations that need them, from 15-minute tasks to multi-day projects. Busy professionals, students, and experts can all contribute meaningfully.",
        image: "/features/skillmatch.png",
        icon: "lightning",
        steps: &[
            Step {
                title: "Build Your Skill Profile",
                description: "Add your skills: teaching, cooking, coding, driving, graphic design, languages, and more.",
            },
            Step {
                title: "Set Availability",
                description: "Indicate when you're free: 30 minutes during lunch, weekends only, or flexible hours.",
            },
            Step {
                title: "Get Matched",
                description: "AI-powered matching suggests opportunities that fit your skills and schedule perfectly.",
            },
            Step {
                title: "Complete Micro-Tasks",
                description: "Contribute through small but impactful tasks like reviewing documents, mentoring calls, or quick deliveries.",
            },
        ],
        advantages: &[
            Advantage {
                title: "For Busy People",
                description: "Even 15 minutes can make a difference. Micro-volunteering fits any schedule.",
                icon: "clock",
            },
            Advantage {
                title: "Expert Matching",
                description: "Doctors, teachers, lawyers: your specialized skills reach those who need them most.",
                icon: "star",
            },
            Advantage {
                title: "Remote Options",
                description: "Many tasks can be done from home, such as translation, design, virtual tutoring.",
                icon: "home",
            },
            Advantage {
                title: "Skill Development",
                description: "Gain experience in new areas while helping others. Great for students and career changers.",
                icon: "growth",
            },
        ],
        impact: &[
            ImpactStat {
                stat: "5x",
                description: "More volunteers participate with micro-task options",
            },
            ImpactStat {
                stat: "60%",
                description: "Of tasks completed by skill-matched volunteers",
            },
            ImpactStat {
                stat: "1hr",
                description: "Average weekly commitment for micro-volunteers",
            },
        ],
    },
    Feature {
        id: "resource-exchange",
        title: "Resource Exchange Board",
        tagline: "Give what you have, get what you need",
        description: "Not all help is about time. The Resource Exchange Board connects donors with requests: clothes, food supplies, books, equipment, and more. NGOs post what they need; community members fulfill those needs.",
        image: "/features/resource.png",
        icon: "exchange",
        steps: &[
            Step {
                title: "Browse Requests",
                description: "See what local NGOs and community members need, from school supplies to medical equipment.",
            },
            Step {
                title: "Donate Items",
                description: "List items you want to donate with photos and condition. Get matched with nearby requests.",
            },
            Step {
                title: "Coordinate Pickup/Delivery",
                description: "Arrange convenient handoff through the app. Schedule pickups or drop-off points.",
            },
            Step {
                title: "Track Your Impact",
                description: "See where your donations went and the lives they touched through follow-up stories.",
            },
        ],
        advantages: &[
            Advantage {
                title: "Direct Impact",
                description: "Your donations go directly to those in need. No middlemen, no delays.",
                icon: "direct",
            },
            Advantage {
                title: "Reduce Waste",
                description: "Items you no longer need find new homes instead of landfills.",
                icon: "recycle",
            },
            Advantage {
                title: "Verified Recipients",
                description: "All requests are vetted. Know your donations reach genuine beneficiaries.",
                icon: "verified",
            },
            Advantage {
                title: "Tax Benefits",
                description: "Get donation receipts from registered NGOs for tax deductions.",
                icon: "receipt",
            },
        ],
        impact: &[
            ImpactStat {
                stat: "10K+",
                description: "Items exchanged through the platform monthly",
            },
            ImpactStat {
                stat: "85%",
                description: "Request fulfillment rate within 48 hours",
            },
            ImpactStat {
                stat: "₹50L",
                description: "Worth of resources exchanged annually",
            },
        ],
    },
    Feature {
        id: "karma-points",
        title: "Karma Points & Impact Resume",
        tagline: "Your impact, recognized and rewarded",
        description: "Every contribution earns Karma Points: volunteer hours, donations, mentoring sessions. Accumulate points to unlock badges, climb leaderboards, and generate a professional Impact Resume showcasing your community service.",
        image: "/features/karma.png",
        icon: "star",
        steps: &[
            Step {
                title: "Earn Karma Points",
                description: "Every verified activity earns points. 10 points per hour volunteered, bonus for referrals.",
            },
            Step {
                title: "Unlock Badges",
                description: "Reach milestones to earn badges: First Timer, Regular Hero, Community Champion, and more.",
            },
            Step {
                title: "Climb Leaderboards",
                description: "Compete with friends and your city. Weekly and monthly leaderboards celebrate top contributors.",
            },
            Step {
                title: "Generate Impact Resume",
                description: "Download a professional PDF resume of all verified contributions, perfect for college and job applications.",
            },
        ],
        advantages: &[
            Advantage {
                title: "Gamification",
                description: "Points and badges make volunteering fun and encourage consistent participation.",
                icon: "game",
            },
            Advantage {
                title: "Recognition",
                description: "Get recognized for your efforts. Share achievements on social media.",
                icon: "trophy",
            },
            Advantage {
                title: "Career Benefits",
                description: "Impact Resume showcases soft skills and community engagement to employers.",
                icon: "briefcase",
            },
            Advantage {
                title: "Unlock Perks",
                description: "High-karma users get early access to exclusive events and partner discounts.",
                icon: "gift",
            },
        ],
        impact: &[
            ImpactStat {
                stat: "2x",
                description: "Higher engagement with gamification elements",
            },
            ImpactStat {
                stat: "10K+",
                description: "Impact Resumes generated by volunteers",
            },
            ImpactStat {
                stat: "75%",
                description: "Users report increased motivation through karma system",
            },
        ],
    },
    Feature {
        id: "story-capsules",
        title: "Story Capsules",
        tagline: "Stories that inspire action",
        description: "Behind every event is a story. Story Capsules capture the human impact: beneficiary testimonials, volunteer experiences, and follow-up updates. These narratives retain emotional engagement and inspire others to join.",
        image: "/features/stories.png",
        icon: "heart",
        steps: &[
            Step {
                title: "Capture Moments",
                description: "During events, volunteers and NGOs capture photos and short video clips.",
            },
            Step {
                title: "Share Testimonials",
                description: "Beneficiaries share how the help impacted their lives, in their own words.",
            },
            Step {
                title: "Create Story Capsule",
                description: "Combine media, testimonials, and impact metrics into a shareable story.",
            },
            Step {
                title: "Inspire Others",
                description: "Stories appear in the app feed and can be shared on social media to inspire new volunteers.",
            },
        ],
        advantages: &[
            Advantage {
                title: "Emotional Connection",
                description: "Stories create lasting emotional impact that statistics alone cannot achieve.",
                icon: "heart",
            },
            Advantage {
                title: "Volunteer Retention",
                description: "Seeing the impact of their work keeps volunteers coming back.",
                icon: "users",
            },
            Advantage {
                title: "Donor Engagement",
                description: "NGOs use stories in fundraising campaigns to connect donors with beneficiaries.",
                icon: "money",
            },
            Advantage {
                title: "Social Proof",
                description: "Real stories from real people attract new volunteers to the platform.",
                icon: "share",
            },
        ],
        impact: &[
            ImpactStat {
                stat: "3x",
                description: "More event signups for well-documented past events",
            },
            ImpactStat {
                stat: "50K+",
                description: "Story views across the platform monthly",
            },
            ImpactStat {
                stat: "60%",
                description: "Higher donation rates with story-backed campaigns",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_card_links_to_a_record() {
        for card in FEATURE_CARDS {
            let feature = feature_by_slug(card.slug)
                .unwrap_or_else(|| panic!("card {} has no feature record", card.slug));
            assert_eq!(feature.title, card.title);
        }
    }

    #[test]
    fn record_ids_are_unique() {
        let ids: HashSet<_> = FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FEATURES.len());
        assert_eq!(FEATURES.len(), 6);
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(feature_by_slug("does-not-exist").is_none());
        assert!(feature_by_slug("").is_none());
        assert!(feature_by_slug("Skillmatch").is_none());
    }

    #[test]
    fn records_have_content_for_every_section() {
        for feature in FEATURES {
            assert!(!feature.steps.is_empty(), "{} has no steps", feature.id);
            assert!(!feature.advantages.is_empty(), "{} has no advantages", feature.id);
            assert!(!feature.impact.is_empty(), "{} has no impact stats", feature.id);
            assert!(feature.image.starts_with("/features/"));
        }
    }
}
