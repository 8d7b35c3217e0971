//! Rule-based health assistant replies.
//!
//! Keyword rules are checked in table order against the lowercased
//! message; the first rule with any matching keyword answers. Keywords are
//! plain substrings, so "hi" also fires inside words such as "which".

pub const GREETING: &str = "Hello! I'm your AI medical assistant. I can help answer general health questions, explain medical terms, and provide information about medications. However, I cannot diagnose conditions or replace professional medical advice. How can I help you today?";

pub const QUICK_QUESTIONS: [&str; 4] = [
    "What should I do if I miss a medication dose?",
    "How do I read my lab results?",
    "What are common side effects?",
    "When should I see a doctor?",
];

pub const DEFAULT_REPLY: &str = "Thank you for your question. I can provide general health information, but for specific medical concerns, diagnoses, or treatment recommendations, please consult with a qualified healthcare professional. How else can I assist you?";

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["symptom", "pain", "hurt"],
        reply: "I understand you're experiencing symptoms. While I can provide general information, it's important to consult with a healthcare professional for proper diagnosis and treatment. Would you like me to explain what you should discuss with your doctor?",
    },
    Rule {
        keywords: &["medication", "medicine", "drug"],
        reply: "I can provide general information about medications, but I cannot give specific medical advice. For questions about your medications, including dosages, side effects, or interactions, please consult your pharmacist or healthcare provider. What would you like to know?",
    },
    Rule {
        keywords: &["emergency", "urgent"],
        reply: "If you're experiencing a medical emergency, please call emergency services (911) immediately. For urgent but non-emergency situations, contact your healthcare provider or visit an urgent care center.",
    },
    Rule {
        keywords: &["hello", "hi", "hey"],
        reply: "Hello! I'm here to help with general health information. Remember, I'm not a replacement for professional medical advice. What would you like to know?",
    },
    Rule {
        keywords: &["thank"],
        reply: "You're welcome! Is there anything else I can help you with regarding your health?",
    },
];

pub fn reply(input: &str) -> &'static str {
    let message = input.to_lowercase();
    let answer = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| message.contains(k)))
        .map_or(DEFAULT_REPLY, |rule| rule.reply);

    tracing::debug!(matched = answer != DEFAULT_REPLY, "Assistant reply chosen");
    answer
}
