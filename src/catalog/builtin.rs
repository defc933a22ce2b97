use super::model::{ContactInfo, Hero, Project, SiteInfo, SkillGroup, SocialLink};

pub(super) const ABOUT_TEXT: &str = "
I am a Senior Product Designer and Design Technologist with 6+ years of experience bridging the gap between human needs and technical constraints.

My philosophy is rooted in \"Calm Technology\" — creating digital environments that respect the user's attention and reduce anxiety. I specialize in complex system logic, accessible interaction patterns, and design systems.

I believe that the best interface is one that gets out of the way, allowing the user to accomplish their intent with flow and confidence.
";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "smriti".to_string(),
            title: "Smriti".to_string(),
            tagline: "Anonymous memory-sharing platform focusing on emotional resonance.".to_string(),
            tags: strings(&["UX Research", "Mobile App", "Social Impact"]),
            thumbnail_url: "https://picsum.photos/800/600?random=1".to_string(),
            hero_url: "https://picsum.photos/1200/600?random=10".to_string(),
            video_url: Some("https://assets.mixkit.co/videos/preview/mixkit-scrolling-through-a-news-feed-on-a-smartphone-4402-large.mp4".to_string()),
            live_url: Some("https://smritiproject.vercel.app/".to_string()),
            description: "Smriti is a digital sanctuary designed for the anonymous sharing of memories. Unlike traditional social media that prioritizes metrics and engagement, Smriti focuses on catharsis and emotional connection through ephemeral, text-first storytelling.".to_string(),
            role: "Lead Product Designer".to_string(),
            duration: "3 Months".to_string(),
            challenge: "Design a social platform that minimizes performance anxiety and toxicity while fostering genuine emotional connection among strangers.".to_string(),
            solution: "A minimalist interface that removes \"likes\" and public metrics. Interactions are limited to private \"resonations\" — pre-written empathetic responses. The visual design uses calming gradients and heavy whitespace to reduce cognitive load.".to_string(),
            interaction_notes: "The core interaction is the \"Resonate\" action. Instead of a quick double-tap (Like), users must hold a button for 1.5 seconds to acknowledge a memory. This \"Time-to-Resonate\" friction is intentional, ensuring users actually read and process the emotion before reacting.".to_string(),
            outcome: "Usability testing showed a 40% increase in time-spent-reading compared to standard feeds, with qualitative feedback highlighting a sense of safety and reduced anxiety.".to_string(),
        },
        Project {
            id: "flavor-filter".to_string(),
            title: "Flavor Filter".to_string(),
            tagline: "Dietary filtering interaction system for complex menus.".to_string(),
            tags: strings(&["Interaction Design", "Accessibility", "System Design"]),
            thumbnail_url: "https://picsum.photos/800/600?random=2".to_string(),
            hero_url: "https://picsum.photos/1200/600?random=20".to_string(),
            video_url: Some("https://assets.mixkit.co/videos/preview/mixkit-selecting-items-on-a-shopping-list-app-4395-large.mp4".to_string()),
            live_url: Some("https://new-filter.vercel.app/".to_string()),
            description: "Flavor Filter is a modular UI system designed for food delivery apps to help users with severe allergies and strict dietary restrictions navigate complex menus safely and efficiently.".to_string(),
            role: "Interaction Designer".to_string(),
            duration: "6 Weeks".to_string(),
            challenge: "Filtering menus often feels binary (show/hide). Users with multiple restrictions (e.g., Gluten-Free + Vegan + Nut Allergy) often face empty states or confusing results. The goal was to provide granular control without overwhelming the user.".to_string(),
            solution: "A multi-tier filtering logic that visualizes ingredients rather than just hiding dishes. The \"Strict Mode\" toggle completely removes unsafe items, while \"Soft Mode\" dims them and highlights the conflicting ingredient. This transparency builds trust.".to_string(),
            interaction_notes: "I designed a \"Sticky Filter Chip\" pattern that remains accessible at the bottom of the screen (thumb zone) on mobile. Tapping it expands a modal with large, toggleable allergen icons. The transition uses a spring animation to feel responsive and lightweight.".to_string(),
            outcome: "The design system was adopted by a mid-sized delivery startup, resulting in a 15% decrease in support tickets related to allergen inquiries.".to_string(),
        },
    ]
}

pub(super) fn skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "Design".to_string(),
            items: strings(&[
                "User Interface (UI)",
                "Interaction Design",
                "Design Systems",
                "Prototyping",
                "Accessibility (WCAG)",
                "Wireframing",
            ]),
        },
        SkillGroup {
            category: "Technical".to_string(),
            items: strings(&[
                "React",
                "TypeScript",
                "HTML5 & CSS3",
                "Tailwind CSS",
                "Frontend Architecture",
                "Git & Version Control",
            ]),
        },
        SkillGroup {
            category: "Tools".to_string(),
            items: strings(&[
                "Figma",
                "VS Code",
                "Storybook",
                "Adobe Creative Suite",
                "Linear",
                "Notion",
            ]),
        },
        SkillGroup {
            category: "Strategy".to_string(),
            items: strings(&[
                "User Research",
                "A/B Testing",
                "Agile Methodology",
                "Product Strategy",
                "Information Architecture",
            ]),
        },
    ]
}

pub(super) fn site() -> SiteInfo {
    SiteInfo {
        brand: "ramanadesign.tech".to_string(),
        hero: Hero {
            eyebrow: "Portfolio".to_string(),
            name: "ramana.".to_string(),
            role: "Product Designer".to_string(),
            blurb: "I design and build prototypes for interactive systems that explore human experience and everyday choices".to_string(),
        },
        contact: ContactInfo {
            email: "hello@ramanadesign.tech".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
        },
        socials: vec![
            SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://linkedin.com".to_string(),
            },
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com".to_string(),
            },
        ],
    }
}
