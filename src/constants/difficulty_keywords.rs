pub const EASY_KEYWORDS: &[&str] = &[
    "introduction",
    "intro",
    "basic",
    "basics",
    "overview",
    "fundamentals",
    "simple",
    "getting started",
    "beginner",
    "elementary",
    "foundation",
    "what is",
    "definition",
    "concept",
    "understanding",
    "primer",
    "first",
    "starting",
    "beginning",
    "initial",
    "essentials",
];

pub const MEDIUM_KEYWORDS: &[&str] = &[
    "intermediate",
    "application",
    "practice",
    "implementation",
    "working with",
    "using",
    "applying",
    "methods",
    "techniques",
    "process",
    "procedure",
    "analysis",
    "comparison",
    "types",
    "classification",
    "structure",
    "design",
    "development",
    "building",
    "creating",
    "programming",
];

pub const HARD_KEYWORDS: &[&str] = &[
    "advanced",
    "complex",
    "optimization",
    "theory",
    "deep dive",
    "architecture",
    "algorithm",
    "mathematical",
    "proof",
    "derivation",
    "research",
    "cutting-edge",
    "sophisticated",
    "intricate",
    "comprehensive",
    "in-depth",
    "expert",
    "quantum",
    "neural",
    "distributed",
    "concurrent",
    "cryptographic",
    "theoretical",
    "abstract",
    "formal",
];

/// Matched against the raw topic, not the lowercased one.
pub const MATH_SYMBOLS: &[char] = &['=', '+', '∫', '∑', '∂', '∆', 'α', 'β'];

pub const HARD_SUBJECTS: &[&str] = &[
    "calculus",
    "quantum",
    "thermodynamics",
    "genetics",
    "organic chemistry",
    "differential equations",
    "linear algebra",
    "topology",
    "cryptography",
    "compiler",
    "operating system",
    "machine learning",
    "deep learning",
];

pub const EASY_SUBJECTS: &[&str] = &[
    "html", "css", "basic", "intro", "overview", "summary", "list", "guide", "tutorial", "example",
];

pub const LEARNING_VERBS: &[&str] = &["learn", "understand", "know", "explore"];

pub const MASTERY_VERBS: &[&str] = &["master", "expert", "professional", "advanced"];
