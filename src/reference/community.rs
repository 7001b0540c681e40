//! Community forum content (mock posts, helplines, stats)

use serde::Serialize;

use crate::crop::Crop;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumPost {
    pub id: u32,
    pub author: &'static str,
    pub location: &'static str,
    pub crop: Crop,
    pub title: &'static str,
    pub preview: &'static str,
    pub replies: u32,
    pub likes: u32,
    /// Relative age as displayed ("2 hours ago")
    pub posted: &'static str,
}

impl ForumPost {
    /// Initials for the avatar placeholder
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub fn forum_posts() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: 1,
            author: "Ramesh Kumar",
            location: "Punjab",
            crop: Crop::Wheat,
            title: "Best fertilizer for wheat in winter season?",
            preview: "I'm looking for recommendations on the best fertilizer combination for wheat during winter...",
            replies: 12,
            likes: 8,
            posted: "2 hours ago",
        },
        ForumPost {
            id: 2,
            author: "Priya Sharma",
            location: "Maharashtra",
            crop: Crop::Cotton,
            title: "Pest control for cotton without chemicals",
            preview: "Has anyone tried organic pest control methods for cotton? Looking for natural alternatives...",
            replies: 7,
            likes: 15,
            posted: "5 hours ago",
        },
        ForumPost {
            id: 3,
            author: "Suresh Patel",
            location: "Gujarat",
            crop: Crop::Rice,
            title: "Water management during monsoon",
            preview: "Excessive rainfall is affecting my rice crop. Need advice on drainage and water management...",
            replies: 9,
            likes: 6,
            posted: "1 day ago",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Helpline {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

impl Helpline {
    /// `tel:` link target with separators removed
    pub fn dial_uri(&self) -> String {
        let digits: String = self.number.chars().filter(char::is_ascii_digit).collect();
        format!("tel:{}", digits)
    }
}

pub fn helplines() -> Vec<Helpline> {
    vec![
        Helpline {
            name: "Kisan Call Center",
            number: "1551",
            description: "24/7 Agricultural Helpline",
        },
        Helpline {
            name: "Soil Health Card",
            number: "1800-180-1551",
            description: "Soil Testing Support",
        },
        Helpline {
            name: "Weather Advisory",
            number: "1588",
            description: "Weather Information",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn community_stats() -> Vec<CommunityStat> {
    vec![
        CommunityStat { value: "1,247", label: "Active Farmers" },
        CommunityStat { value: "89", label: "Experts Online" },
        CommunityStat { value: "3,456", label: "Questions Solved" },
        CommunityStat { value: "24/7", label: "Support" },
    ]
}
