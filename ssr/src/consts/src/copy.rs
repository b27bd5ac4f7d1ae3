pub const PAGE_TITLE: &str = "Animated to Real Video Converter";
pub const PAGE_SUBTITLE: &str =
    "Transform your animated videos into photorealistic content using AI";

pub const UPLOAD_PROMPT: &str = "Click to upload your animated video";
pub const UPLOAD_HINT: &str = "Supports MP4, MOV, AVI, and more";

pub const ORIGINAL_LABEL: &str = "Original (Animated)";
pub const CONVERTED_LABEL: &str = "Converted (Realistic)";
pub const PROGRESS_LABEL: &str = "Converting to realistic video...";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureHighlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURE_HIGHLIGHTS: [FeatureHighlight; 3] = [
    FeatureHighlight {
        icon: "🎨",
        title: "AI-Powered",
        desc: "Advanced neural networks for realistic conversion",
    },
    FeatureHighlight {
        icon: "⚡",
        title: "Fast Processing",
        desc: "Quick conversion with optimized algorithms",
    },
    FeatureHighlight {
        icon: "🎬",
        title: "High Quality",
        desc: "Maintains resolution and frame rate",
    },
];
