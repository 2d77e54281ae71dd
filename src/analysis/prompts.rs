use super::models::Category;

/// System prompt for the rubric analysis call. The reply must arrive in
/// the JSON shape stated here; `rubric::parse_rubric_reply` depends on it.
pub fn rubric_system_prompt() -> String {
    r#"You are an expert interview coach and HR professional. Analyze interview responses across these dimensions:
1. Content Quality (0-10): Relevance, depth, and substance
2. Communication Clarity (0-10): How clearly the message is conveyed
3. Confidence Level (0-10): Apparent confidence and conviction
4. Structure & Organization (0-10): Logical flow and organization
5. Professionalism (0-10): Professional tone and language

Provide analysis in this JSON format:
{
    "content_quality": {"score": X, "feedback": "detailed feedback"},
    "communication_clarity": {"score": X, "feedback": "detailed feedback"},
    "confidence_level": {"score": X, "feedback": "detailed feedback"},
    "structure_organization": {"score": X, "feedback": "detailed feedback"},
    "professionalism": {"score": X, "feedback": "detailed feedback"},
    "strengths": ["strength 1", "strength 2"],
    "areas_for_improvement": ["improvement 1", "improvement 2"],
    "suggestions": ["suggestion 1", "suggestion 2", "suggestion 3"]
}

Be constructive, specific, and encouraging."#
        .to_string()
}

/// User prompt for the rubric analysis call.
pub fn analysis_prompt(text: &str, question: &str, category: Category) -> String {
    let question = if question.trim().is_empty() {
        "Not provided"
    } else {
        question
    };

    format!(
        r#"Please analyze this interview response:

Question Category: {}
Original Question: {}

Candidate's Response:
"{}"

Provide a comprehensive analysis following the JSON format specified."#,
        category.as_str(),
        question,
        text
    )
}

pub fn follow_up_system_prompt() -> &'static str {
    "You are an expert interviewer who asks insightful follow-up questions."
}

/// User prompt asking for exactly one follow-up question.
pub fn follow_up_prompt(original_question: &str, user_response: &str, category: Category) -> String {
    format!(
        r#"Based on the following interview exchange, generate ONE thoughtful follow-up question that:
1. Digs deeper into the candidate's experience
2. Tests their problem-solving or critical thinking
3. Is relevant to the {} category
4. Encourages specific examples or details

Original Question: {}
Candidate's Response: {}

Generate a single, well-crafted follow-up question:"#,
        category.as_str(),
        original_question,
        user_response
    )
}
