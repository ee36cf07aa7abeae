use crate::fields::FormFields;
use crate::keywords::{AudienceSuggestionList, KeywordList};

/// Keyword generation prompt
pub fn generate_keywords(fields: &FormFields) -> String {
    let existing = if fields.freeform_keywords.is_empty() {
        String::new()
    } else {
        format!("Keywords already in use: {}.\n", fields.freeform_keywords)
    };
    format!(
        "Based on the following product information, please generate SEO keywords.\n\
         Product Name: {}.\n\
         Category: {}.\n\
         Unique Selling Points: {}.\n\
         Target Audience: {}.\n\
         Current Description: {}.\n\
         Specifications: {}.\n\
         {}\n\
         Respond only with a list of keywords, one keyword per line. \
         Each line may start with \"* \". You may group keywords under bold section titles \
         such as **Primary Keywords** on their own line.",
        fields.product_name,
        fields.category,
        fields.unique_selling_points,
        fields.target_audience,
        fields.current_description,
        fields.specifications,
        existing
    )
}

/// Target audience suggestion prompt
pub fn suggest_audience(fields: &FormFields) -> String {
    format!(
        "Based on the following product information, suggest who the target audience is.\n\
         Product Name: {}.\n\
         Category: {}.\n\
         Unique Selling Points: {}.\n\
         Current Description: {}.\n\
         Specifications: {}.\n\n\
         Respond only with target audience suggestions, one suggestion per line.",
        fields.product_name,
        fields.category,
        fields.unique_selling_points,
        fields.current_description,
        fields.specifications
    )
}

/// Description optimization prompt built from the form and the current keyword and audience lists.
pub fn optimize_description(
    fields: &FormFields,
    keywords: &KeywordList,
    audience: &AudienceSuggestionList,
) -> String {
    let keyword_text = combine(&keywords.joined(), &fields.freeform_keywords);
    let audience_text = combine(&fields.target_audience, &audience.joined());
    format!(
        "I have a product, {}, and would like to improve its SEO ranking on search engines. \
         Can you help me rewrite the product description to be more compelling and informative, \
         while also incorporating relevant keywords for current search trends?\n\
         Here are the keywords to incorporate: {}.\n\
         Additionally, could you suggest some backend tags that I can use to further optimize the product search? \
         Here is some additional information that could be helpful:\n\
         1. Product name and category: {}, {}.\n\
         2. Unique Selling Points: {}.\n\
         3. Target Audience: {}.\n\
         4. Existing Description: {}.\n\
         5. Product Specifications: {} (specifications include size, color, material).\n\n\
         Format the answer as follows:\n\
         - Start with 3-5 key features, one per line, written as \"- **Feature**: detail\".\n\
         - Then write the elaborated description as plain paragraphs.\n\
         - Then a line starting with \"More Information:\" followed by the specifications.\n\
         - Finish with a line starting with \"Backend Tags:\" followed by comma-separated tags.",
        fields.product_name,
        keyword_text,
        fields.product_name,
        fields.category,
        fields.unique_selling_points,
        audience_text,
        fields.current_description,
        fields.specifications
    )
}

fn combine(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (false, false) => format!("{}, {}", first, second),
        (false, true) => first.to_string(),
        (true, false) => second.to_string(),
        (true, true) => String::new(),
    }
}
