//! Keyword vocabulary shared by every evaluation.
//!
//! All tables live in one immutable `static`. Bump [`TAXONOMY_VERSION`]
//! whenever a phrase set changes, since scores shift with it.

pub const TAXONOMY_VERSION: &str = "2024.1";

pub type Phrases = &'static [&'static str];

#[derive(Debug)]
pub struct Domain {
    pub name: &'static str,
    pub phrases: Phrases,
}

/// Phrase group that contributes `weight` once when any of its phrases hits.
#[derive(Debug)]
pub struct WeightedGroup {
    pub weight: f64,
    pub phrases: Phrases,
}

#[derive(Debug)]
pub struct Taxonomy {
    pub version: &'static str,
    pub domains: &'static [Domain],
    pub depth: &'static [WeightedGroup],
    pub nonfunctional: &'static [WeightedGroup],
    pub data: &'static [WeightedGroup],
    pub integration: &'static [WeightedGroup],
    pub novelty: &'static [WeightedGroup],
    pub stack: StackTriggers,
    pub suggestion: SuggestionTriggers,
}

#[derive(Debug)]
pub struct StackTriggers {
    pub web_frontend: Phrases,
    pub mobile_frontend: Phrases,
    pub streaming: Phrases,
    pub ml: &'static [Phrases],
    pub blockchain: Phrases,
    pub deployment: Phrases,
}

#[derive(Debug)]
pub struct SuggestionTriggers {
    pub dataset: Phrases,
    pub blockchain_rationale: Phrases,
}

pub const MACHINE_LEARNING: Phrases = &["machine learning", "ml", "supervised", "unsupervised"];
pub const DEEP_LEARNING: Phrases = &[
    "deep learning",
    "neural network",
    "cnn",
    "rnn",
    "lstm",
    "transformer",
];
pub const COMPUTER_VISION: Phrases = &["computer vision", "image processing", "opencv"];
pub const NLP: Phrases = &["nlp", "natural language", "bert", "gpt", "sentiment"];
pub const DATA_STREAM: Phrases = &["real-time", "streaming", "kafka", "spark", "flink"];
pub const BLOCKCHAIN: Phrases = &[
    "blockchain",
    "smart contract",
    "solana",
    "ethereum",
    "web3",
];
pub const IOT: Phrases = &[
    "iot",
    "sensor",
    "arduino",
    "raspberry pi",
    "microcontroller",
    "edge device",
];
pub const MOBILE: Phrases = &["android", "ios", "react native", "flutter", "mobile app"];
pub const WEB: Phrases = &[
    "web app",
    "react",
    "angular",
    "vue",
    "frontend",
    "dashboard",
    "portal",
];
pub const SECURITY: Phrases = &[
    "encryption",
    "cybersecurity",
    "penetration testing",
    "auth",
    "authorization",
];
pub const OPTIMIZATION: Phrases = &[
    "optimization",
    "heuristic",
    "metaheuristic",
    "genetic algorithm",
];

const BLOCKCHAIN_OR_CONSENSUS: Phrases = &[
    "blockchain",
    "smart contract",
    "solana",
    "ethereum",
    "web3",
    "consensus",
];

static BUILTIN: Taxonomy = Taxonomy {
    version: TAXONOMY_VERSION,
    domains: &[
        Domain { name: "machine_learning", phrases: MACHINE_LEARNING },
        Domain { name: "deep_learning", phrases: DEEP_LEARNING },
        Domain { name: "computer_vision", phrases: COMPUTER_VISION },
        Domain { name: "nlp", phrases: NLP },
        Domain { name: "data_stream", phrases: DATA_STREAM },
        Domain { name: "blockchain", phrases: BLOCKCHAIN },
        Domain { name: "iot", phrases: IOT },
        Domain { name: "mobile", phrases: MOBILE },
        Domain { name: "web", phrases: WEB },
        Domain { name: "security", phrases: SECURITY },
        Domain { name: "optimization", phrases: OPTIMIZATION },
    ],
    depth: &[
        WeightedGroup { weight: 3.0, phrases: DEEP_LEARNING },
        WeightedGroup { weight: 2.0, phrases: DATA_STREAM },
        WeightedGroup { weight: 2.0, phrases: BLOCKCHAIN_OR_CONSENSUS },
        WeightedGroup { weight: 2.0, phrases: OPTIMIZATION },
        WeightedGroup { weight: 1.0, phrases: &["real-time", "low latency"] },
    ],
    nonfunctional: &[
        WeightedGroup { weight: 3.0, phrases: &["real-time", "low latency", "high throughput"] },
        WeightedGroup {
            weight: 2.0,
            phrases: &["scalable", "scalability", "distributed system", "distributed"],
        },
        WeightedGroup { weight: 2.0, phrases: &["high availability", "fault tolerant", "failover"] },
    ],
    data: &[
        WeightedGroup { weight: 3.0, phrases: &["big data", "large-scale"] },
        WeightedGroup { weight: 2.0, phrases: &["images", "video", "audio"] },
        WeightedGroup { weight: 2.0, phrases: &["time series", "multivariate"] },
    ],
    integration: &[
        WeightedGroup {
            weight: 2.0,
            phrases: &["api integration", "third-party api", "external api", "webhook"],
        },
        WeightedGroup { weight: 2.0, phrases: &["payment", "stripe", "paypal"] },
        WeightedGroup { weight: 2.0, phrases: IOT },
    ],
    novelty: &[
        WeightedGroup {
            weight: 1.0,
            phrases: &["smart city", "healthcare", "education", "finance", "agriculture"],
        },
        WeightedGroup {
            weight: 1.0,
            phrases: &["research", "novel", "state-of-the-art", "sota"],
        },
    ],
    stack: StackTriggers {
        web_frontend: &["web", "dashboard", "portal", "web app"],
        mobile_frontend: &["mobile", "android", "ios"],
        streaming: DATA_STREAM,
        ml: &[MACHINE_LEARNING, DEEP_LEARNING, COMPUTER_VISION, NLP],
        blockchain: BLOCKCHAIN,
        deployment: &["cloud", "deployment"],
    },
    suggestion: SuggestionTriggers {
        dataset: &["dataset"],
        blockchain_rationale: &["use case", "problem", "why blockchain"],
    },
};

impl Taxonomy {
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    pub fn domain_phrases(&self) -> Vec<Phrases> {
        self.domains.iter().map(|domain| domain.phrases).collect()
    }
}
