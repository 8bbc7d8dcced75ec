//! Canonical category and payment-method labels
//!
//! Transactions store categories and payment methods as free strings so that
//! user-defined values keep working. These enums only supply the recommended
//! label set; budget goals match transactions by label text.

use std::fmt;

/// Canonical transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Housing,
    Transport,
    Utilities,
    Shopping,
    Clothing,
    Entertainment,
    Health,
    Education,
    Pets,
    Gifts,
    Travel,
    Salary,
    Investment,
    Other,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Food,
        Category::Housing,
        Category::Transport,
        Category::Utilities,
        Category::Shopping,
        Category::Clothing,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::Pets,
        Category::Gifts,
        Category::Travel,
        Category::Salary,
        Category::Investment,
        Category::Other,
    ];

    /// The stored label for this category
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Clothing => "Clothing",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Pets => "Pets",
            Self::Gifts => "Gifts",
            Self::Travel => "Travel",
            Self::Salary => "Salary",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }

    /// Categories that budget goals are offered for (everything but income sources)
    pub fn expense_categories() -> impl Iterator<Item = Category> {
        Self::ALL
            .into_iter()
            .filter(|c| !matches!(c, Category::Salary | Category::Investment))
    }

    /// Look up a canonical category by label, ignoring case
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Pix,
    Credit,
    Debit,
    Cash,
    MealTicket,
    Transfer,
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 7] = [
        PaymentMethod::Pix,
        PaymentMethod::Credit,
        PaymentMethod::Debit,
        PaymentMethod::Cash,
        PaymentMethod::MealTicket,
        PaymentMethod::Transfer,
        PaymentMethod::Other,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pix => "Pix",
            Self::Credit => "Credit",
            Self::Debit => "Debit",
            Self::Cash => "Cash",
            Self::MealTicket => "Meal-Ticket",
            Self::Transfer => "Transfer",
            Self::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<PaymentMethod> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonicalize user input: known labels get their canonical spelling,
/// anything else is kept as typed (trimmed).
pub fn canonical_category(input: &str) -> String {
    Category::from_label(input)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| input.trim().to_string())
}

pub fn canonical_payment_method(input: &str) -> String {
    PaymentMethod::from_label(input)
        .map(|m| m.label().to_string())
        .unwrap_or_else(|| input.trim().to_string())
}
