use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};

pub fn wardrobe_review_prompt(start: &str, end: &str) -> GetPromptResult {
    GetPromptResult::new(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "Review my wardrobe usage between {start} and {end}.\n\nCover:\n1. Most and least worn garments\n2. Category and color balance\n3. Weekly outfit cadence\n4. One concrete suggestion for next month\n\nUse wear_summary for the headline numbers, wear_frequency (descending and ascending) for the extremes, wear_breakdown with attribute=category and attribute=color for the balance, and wear_periods with granularity=week for cadence. Keep the write-up short and practical."
        ),
    )])
    .with_description(format!("Wardrobe wear review for {} to {}", start, end))
}

pub fn closet_rotation_prompt(threshold: u64) -> GetPromptResult {
    GetPromptResult::new(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format!(
            "Help me rotate neglected clothes back into use.\n\nSteps:\n1. Call dormant_garments with threshold={threshold} to list sleeping items\n2. Call wear_pairs over the last three months to see which combinations I already reach for\n3. Propose outfits that pair each sleeping item with one of my go-to combinations\n\nFlag anything that has never been worn at all separately."
        ),
    )])
    .with_description(format!(
        "Rotation ideas for garments worn {} times or fewer",
        threshold
    ))
}
