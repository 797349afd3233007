use serde::Serialize;

/// One quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Question identifier, 1 through 8.
    pub id: u32,
    /// Business area the question asks about.
    pub area: &'static str,
    /// The statement the respondent rates.
    pub text: &'static str,
}

/// One point on the answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    /// Score, 1 through 5.
    pub score: u8,
    /// Label shown for the score.
    pub label: &'static str,
}

/// The quiz questions in presentation order.
pub const QUESTIONS: [Question; 8] = [
    Question {
        id: 1,
        area: "Files",
        text: "If you need a document (invoice, contract, employee record), you can find it in under 2 minutes without asking anyone.",
    },
    Question {
        id: 2,
        area: "Daily work",
        text: "Your team has one place to check what needs to be done today (not just chat messages).",
    },
    Question {
        id: 3,
        area: "Approvals",
        text: "When someone approves a purchase or discount, it is recorded and easy to check later.",
    },
    Question {
        id: 4,
        area: "Customers",
        text: "You can see a customer's latest order and any unpaid balance without digging through chat threads.",
    },
    Question {
        id: 5,
        area: "Inventory",
        text: "You know what is in stock right now and what needs reordering without doing a manual count.",
    },
    Question {
        id: 6,
        area: "Payments",
        text: "You can quickly see what is due this week (bills, supplier payables, customer collections).",
    },
    Question {
        id: 7,
        area: "Payroll",
        text: "Payroll is computed the same way every time using clear rules, not manual edits each cut-off.",
    },
    Question {
        id: 8,
        area: "Reports",
        text: "You can produce a simple weekly snapshot (sales, cash, stock, expenses) in under 10 minutes.",
    },
];

/// The answer scale, lowest first.
pub const OPTIONS: [AnswerOption; 5] = [
    AnswerOption { score: 1, label: "Not at all" },
    AnswerOption { score: 2, label: "Not yet" },
    AnswerOption { score: 3, label: "Sometimes" },
    AnswerOption { score: 4, label: "Mostly" },
    AnswerOption { score: 5, label: "Yes, always" },
];

/// Looks up a question by id.
pub fn question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
