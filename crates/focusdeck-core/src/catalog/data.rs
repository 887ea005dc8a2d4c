//! Catalog contents. External data, never transformed by the core.

use super::{AiTool, Book, Game};

pub fn books() -> &'static [Book] {
    BOOKS
}

pub fn ai_tools() -> &'static [AiTool] {
    AI_TOOLS
}

pub fn games() -> &'static [Game] {
    GAMES
}

const BOOKS: &[Book] = &[
    Book {
        title: "Eloquent JavaScript",
        author: "Marijn Haverbeke",
        description: "A Modern Introduction to Programming",
        icon: "📚",
        url: "https://eloquentjavascript.net/",
        category: "JavaScript",
        level: "Beginner to Advanced",
    },
    Book {
        title: "You Don't Know JS",
        author: "Kyle Simpson",
        description: "Deep dive into JavaScript mechanisms",
        icon: "🔍",
        url: "https://github.com/getify/You-Dont-Know-JS",
        category: "JavaScript",
        level: "Advanced",
    },
    Book {
        title: "Automate the Boring Stuff",
        author: "Al Sweigart",
        description: "Learn Python through practical projects",
        icon: "🐍",
        url: "https://automatetheboringstuff.com/",
        category: "Python",
        level: "Beginner",
    },
    Book {
        title: "Think Python",
        author: "Allen B. Downey",
        description: "How to Think Like a Computer Scientist",
        icon: "🧠",
        url: "https://greenteapress.com/wp/think-python-2e/",
        category: "Python",
        level: "Beginner",
    },
    Book {
        title: "Oracle Java Tutorials",
        author: "Oracle Corporation",
        description: "Official Java programming tutorials",
        icon: "☕",
        url: "https://docs.oracle.com/javase/tutorial/",
        category: "Java",
        level: "All Levels",
    },
    Book {
        title: "Learn C++",
        author: "LearnCpp.com",
        description: "Comprehensive C++ tutorial",
        icon: "🔧",
        url: "https://www.learncpp.com/",
        category: "C++",
        level: "All Levels",
    },
    Book {
        title: "A Tour of Go",
        author: "Google",
        description: "Interactive introduction to Go",
        icon: "🐹",
        url: "https://tour.golang.org/",
        category: "Go",
        level: "Beginner",
    },
    Book {
        title: "The Rust Programming Language",
        author: "Rust Team",
        description: "Official Rust book",
        icon: "🦀",
        url: "https://doc.rust-lang.org/book/",
        category: "Rust",
        level: "All Levels",
    },
    Book {
        title: "Rust by Example",
        author: "Rust Community",
        description: "Learn Rust through examples",
        icon: "⚡",
        url: "https://doc.rust-lang.org/rust-by-example/",
        category: "Rust",
        level: "Beginner",
    },
    Book {
        title: "TypeScript Handbook",
        author: "Microsoft",
        description: "Official TypeScript documentation",
        icon: "📘",
        url: "https://www.typescriptlang.org/docs/",
        category: "TypeScript",
        level: "All Levels",
    },
    Book {
        title: "Kotlin Koans",
        author: "JetBrains",
        description: "Interactive Kotlin exercises",
        icon: "🧩",
        url: "https://play.kotlinlang.org/koans/",
        category: "Kotlin",
        level: "Beginner",
    },
    Book {
        title: "SQLBolt",
        author: "SQLBolt Team",
        description: "Interactive SQL lessons",
        icon: "🗃️",
        url: "https://sqlbolt.com/",
        category: "SQL",
        level: "Beginner",
    },
    Book {
        title: "MDN Web Docs",
        author: "Mozilla",
        description: "Complete web development documentation",
        icon: "🌐",
        url: "https://developer.mozilla.org/en-US/docs/Web",
        category: "Web Dev",
        level: "All Levels",
    },
    Book {
        title: "Learn You a Haskell",
        author: "Miran Lipovača",
        description: "Fun introduction to Haskell",
        icon: "λ",
        url: "http://learnyouahaskell.com/",
        category: "Haskell",
        level: "Beginner",
    },
    Book {
        title: "R for Data Science",
        author: "Hadley Wickham",
        description: "Learn R for data analysis",
        icon: "📊",
        url: "https://r4ds.had.co.nz/",
        category: "R",
        level: "Beginner",
    },
    Book {
        title: "Python Data Science Handbook",
        author: "Jake VanderPlas",
        description: "Essential data science tools",
        icon: "📈",
        url: "https://jakevdp.github.io/PythonDataScienceHandbook/",
        category: "Data Science",
        level: "Intermediate",
    },
];

const AI_TOOLS: &[AiTool] = &[
    AiTool {
        name: "ChatGPT",
        description: "Advanced AI assistant for learning and productivity",
        icon: "🤖",
        url: "https://chat.openai.com",
        use_for: "General conversations, learning, problem-solving",
        features: &["Text generation", "Code help", "Learning assistance"],
    },
    AiTool {
        name: "Claude",
        description: "AI assistant by Anthropic",
        icon: "🧠",
        url: "https://claude.ai",
        use_for: "Research assistance, writing, analysis, coding help",
        features: &["Long conversations", "Document analysis", "Ethical AI"],
    },
    AiTool {
        name: "Perplexity AI",
        description: "AI-powered search engine",
        icon: "🔎",
        url: "https://www.perplexity.ai",
        use_for: "Research, fact-checking, academic queries",
        features: &["Source citations", "Real-time data", "Academic focus"],
    },
    AiTool {
        name: "GitHub Copilot",
        description: "AI code completion",
        icon: "💻",
        url: "https://github.com/features/copilot",
        use_for: "Code completion, bug fixes, documentation",
        features: &["Code completion", "Bug detection", "Documentation"],
    },
    AiTool {
        name: "Codeium",
        description: "Free AI-powered code acceleration",
        icon: "🚀",
        url: "https://codeium.com",
        use_for: "Code generation, autocomplete, chat assistance",
        features: &["Free tier", "40+ languages", "IDE integration"],
    },
    AiTool {
        name: "Grammarly",
        description: "AI-powered writing assistant",
        icon: "✍️",
        url: "https://www.grammarly.com",
        use_for: "Grammar checking, style improvement",
        features: &["Grammar check", "Style suggestions", "Plagiarism detection"],
    },
    AiTool {
        name: "QuillBot",
        description: "AI paraphrasing and writing enhancement",
        icon: "🪶",
        url: "https://quillbot.com",
        use_for: "Paraphrasing, summarizing, grammar checking",
        features: &["Paraphrasing", "Summarizer", "Citation generator"],
    },
    AiTool {
        name: "Midjourney",
        description: "AI image generation from text",
        icon: "🎨",
        url: "https://www.midjourney.com",
        use_for: "Artistic image creation, concept art",
        features: &["High quality art", "Style variety", "Community"],
    },
    AiTool {
        name: "Stable Diffusion",
        description: "Open-source AI image generation",
        icon: "🌊",
        url: "https://stability.ai/stablediffusion",
        use_for: "Free image generation, custom models",
        features: &["Open source", "Customizable", "Local deployment"],
    },
    AiTool {
        name: "ElevenLabs",
        description: "AI voice synthesis and cloning",
        icon: "🔊",
        url: "https://elevenlabs.io",
        use_for: "Voice cloning, speech synthesis",
        features: &["Voice cloning", "Multiple languages", "Realistic speech"],
    },
    AiTool {
        name: "Semantic Scholar",
        description: "AI-powered academic search",
        icon: "📚",
        url: "https://www.semanticscholar.org",
        use_for: "Academic research, paper discovery",
        features: &["Academic focus", "Citation tracking", "Research insights"],
    },
    AiTool {
        name: "Notion AI",
        description: "AI writing assistant for Notion",
        icon: "📋",
        url: "https://www.notion.so/product/ai",
        use_for: "Note-taking, content generation",
        features: &["Workspace integration", "Content generation", "Organization"],
    },
    AiTool {
        name: "Otter.ai",
        description: "AI meeting transcription",
        icon: "🦦",
        url: "https://otter.ai",
        use_for: "Meeting transcription, note-taking",
        features: &["Real-time transcription", "Meeting summaries", "Speaker identification"],
    },
    AiTool {
        name: "Socratic by Google",
        description: "AI homework helper",
        icon: "🤔",
        url: "https://socratic.org",
        use_for: "Homework help, concept explanation",
        features: &["Photo-based questions", "Step-by-step help", "Multiple subjects"],
    },
    AiTool {
        name: "Hugging Face",
        description: "Open-source AI model hub",
        icon: "🤗",
        url: "https://huggingface.co",
        use_for: "Pre-trained models, model fine-tuning",
        features: &["Model hub", "Transformers library", "Datasets"],
    },
    AiTool {
        name: "DeepL",
        description: "AI-powered translation",
        icon: "🌍",
        url: "https://www.deepl.com",
        use_for: "Document translation, real-time translation",
        features: &["High accuracy", "Document translation", "API access"],
    },
    AiTool {
        name: "Wolfram Alpha",
        description: "Computational knowledge engine",
        icon: "🧮",
        url: "https://www.wolframalpha.com",
        use_for: "Mathematical computation, data analysis",
        features: &["Step-by-step solutions", "Data computation", "Knowledge base"],
    },
];

const GAMES: &[Game] = &[
    Game {
        name: "Typing Speed Test",
        description: "Improve your typing speed and accuracy",
        icon: "⌨️",
        category: "Skill Game",
        features: &["Speed tracking", "Accuracy measurement", "Progress stats"],
    },
    Game {
        name: "Chess Master",
        description: "Play chess against AI or solve tactical puzzles",
        icon: "♟️",
        category: "Strategy Game",
        features: &["AI opponents", "Puzzle mode", "Move analysis"],
    },
    Game {
        name: "Word Search Pro",
        description: "Find hidden words in themed grids",
        icon: "🔍",
        category: "Puzzle Game",
        features: &["Multiple themes", "Timer mode", "Hint system"],
    },
    Game {
        name: "Memory Match",
        description: "Test your memory with card matching games",
        icon: "🧠",
        category: "Memory Game",
        features: &["Multiple card sets", "Difficulty levels", "High scores"],
    },
    Game {
        name: "Math Quiz Challenge",
        description: "Sharpen your math skills with timed quizzes",
        icon: "🔢",
        category: "Educational Game",
        features: &["Multiple operations", "Progress tracking", "Achievements"],
    },
    Game {
        name: "Code Breaker",
        description: "Solve programming logic puzzles and algorithms",
        icon: "💻",
        category: "Logic Game",
        features: &["Algorithm puzzles", "Hints available", "Learning mode"],
    },
    Game {
        name: "Sudoku Solver",
        description: "Classic number puzzle with multiple difficulties",
        icon: "🔢",
        category: "Puzzle Game",
        features: &["Multiple difficulties", "Hint system", "Statistics"],
    },
    Game {
        name: "Snake Game",
        description: "Classic snake game with modern twists",
        icon: "🐍",
        category: "Arcade Game",
        features: &["Power-ups", "Multiple modes", "High scores"],
    },
    Game {
        name: "2048 Numbers",
        description: "Combine numbers to reach the 2048 tile",
        icon: "🎯",
        category: "Logic Game",
        features: &["Swipe controls", "Undo moves", "Best score"],
    },
    Game {
        name: "Trivia Challenge",
        description: "Test your general knowledge across various topics",
        icon: "🧠",
        category: "Quiz Game",
        features: &["Multiple categories", "Timed questions", "Leaderboard"],
    },
    Game {
        name: "Minesweeper",
        description: "Classic mine detection puzzle game",
        icon: "💣",
        category: "Logic Game",
        features: &["Multiple difficulties", "Custom grids", "Flag system"],
    },
    Game {
        name: "Solitaire Cards",
        description: "Classic card game with multiple variations",
        icon: "🃏",
        category: "Card Game",
        features: &["Multiple variants", "Auto-complete", "Themes"],
    },
];
