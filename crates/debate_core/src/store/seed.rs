//! Default topic set created by a seeded store.

/// One sample topic, in creation order.
#[derive(Debug, Clone, Copy)]
pub struct SeedTopic {
    pub title: &'static str,
    pub description: &'static str,
    pub complexity: i32,
    pub category: &'static str,
}

pub const DEFAULT_TOPICS: &[SeedTopic] = &[
    SeedTopic {
        title: "Climate Change",
        description: "Should governments prioritize economic growth or environmental protection?",
        complexity: 7,
        category: "Environmental",
    },
    SeedTopic {
        title: "Universal Healthcare",
        description: "Should healthcare be a guaranteed government service or market-based?",
        complexity: 6,
        category: "Healthcare",
    },
    SeedTopic {
        title: "Artificial Intelligence Ethics",
        description: "Should AI development be regulated or left to market forces?",
        complexity: 8,
        category: "Technology",
    },
    SeedTopic {
        title: "Gun Control",
        description: "Do gun control laws reduce crime or infringe on constitutional rights?",
        complexity: 9,
        category: "Politics",
    },
    SeedTopic {
        title: "Immigration Policy",
        description: "Should immigration be increased, decreased, or reformed?",
        complexity: 7,
        category: "Politics",
    },
    SeedTopic {
        title: "Social Media Impact",
        description: "Does social media do more harm than good for young people?",
        complexity: 3,
        category: "Technology",
    },
    SeedTopic {
        title: "School Start Times",
        description: "Should high schools start later in the morning?",
        complexity: 2,
        category: "Education",
    },
    SeedTopic {
        title: "College Tuition",
        description: "Should college tuition be free or paid by students?",
        complexity: 5,
        category: "Education",
    },
    SeedTopic {
        title: "Minimum Wage",
        description: "Should the minimum wage be increased or eliminated?",
        complexity: 4,
        category: "Economics",
    },
    SeedTopic {
        title: "Space Exploration",
        description: "Should governments fund space exploration or focus on Earth problems?",
        complexity: 6,
        category: "Science",
    },
    SeedTopic {
        title: "Animal Testing",
        description: "Is animal testing justified for medical research?",
        complexity: 5,
        category: "Ethics",
    },
    SeedTopic {
        title: "Death Penalty",
        description: "Should the death penalty be abolished or maintained?",
        complexity: 8,
        category: "Social",
    },
];
