use std::fmt;

/// The closed catalog of tech-stack constraints a master prompt may mandate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechStackOption {
    /// React 18+ as the UI framework.
    React18,
    /// TypeScript throughout.
    TypeScript,
    /// Tailwind CSS for styling.
    Tailwind,
    /// Framer Motion for animation.
    FramerMotion,
    /// Lucide icon set.
    Lucide,
    /// Recharts for charting.
    Recharts,
    /// D3.js for custom visualization.
    D3,
    /// Gemini API integration.
    GeminiApi,
}

impl TechStackOption {
    /// All available options in catalog order.
    pub const ALL: [TechStackOption; 8] = [
        TechStackOption::React18,
        TechStackOption::TypeScript,
        TechStackOption::Tailwind,
        TechStackOption::FramerMotion,
        TechStackOption::Lucide,
        TechStackOption::Recharts,
        TechStackOption::D3,
        TechStackOption::GeminiApi,
    ];

    /// Stable key for CLI arguments and config files.
    pub fn key(&self) -> &'static str {
        match self {
            TechStackOption::React18 => "react",
            TechStackOption::TypeScript => "typescript",
            TechStackOption::Tailwind => "tailwind",
            TechStackOption::FramerMotion => "framer-motion",
            TechStackOption::Lucide => "lucide",
            TechStackOption::Recharts => "recharts",
            TechStackOption::D3 => "d3",
            TechStackOption::GeminiApi => "gemini-api",
        }
    }

    /// Human-readable label as it appears inside the master prompt.
    pub fn label(&self) -> &'static str {
        match self {
            TechStackOption::React18 => "React 18+",
            TechStackOption::TypeScript => "TypeScript",
            TechStackOption::Tailwind => "Tailwind CSS",
            TechStackOption::FramerMotion => "Framer Motion",
            TechStackOption::Lucide => "Lucide Icons",
            TechStackOption::Recharts => "Recharts",
            TechStackOption::D3 => "D3.js",
            TechStackOption::GeminiApi => "Gemini API",
        }
    }

    /// Parse an option from its CLI key.
    pub fn from_key(key: &str) -> Option<TechStackOption> {
        match key.to_lowercase().as_str() {
            "react" | "react18" => Some(TechStackOption::React18),
            "typescript" | "ts" => Some(TechStackOption::TypeScript),
            "tailwind" => Some(TechStackOption::Tailwind),
            "framer-motion" | "framer" => Some(TechStackOption::FramerMotion),
            "lucide" => Some(TechStackOption::Lucide),
            "recharts" => Some(TechStackOption::Recharts),
            "d3" => Some(TechStackOption::D3),
            "gemini-api" | "gemini" => Some(TechStackOption::GeminiApi),
            _ => None,
        }
    }
}

impl fmt::Display for TechStackOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
