//! Prompt templates for the analyze/refine flow

use crate::analysis::answers::AnswerSet;

/// Templates for generating the instruction sent at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction for stage 1: pick a technique and ask clarifying questions
    ///
    /// `technique_catalog` is the output of
    /// [`GuidelineSet::summarized_catalog`](crate::GuidelineSet::summarized_catalog).
    pub fn analyze(introduction: &str, technique_catalog: &str, user_prompt: &str) -> String {
        format!(
            r#"Prompt Engineering Guide:
{introduction}

Available techniques:
{technique_catalog}
User's Raw Prompt:
{user_prompt}

Task:
Using only the techniques listed in the Prompt Engineering Guide, analyze the User's Raw Prompt and decide:

1. Which single technique you will apply. Use its name exactly as listed.
2. Which clarifying questions, if any, you need answered before rewriting the prompt. For each question, give one example of an appropriate answer.

Output:
Respond with a JSON object only, no extra keys or prose:
- "ChoseTechnique": the name of the chosen technique
- "ClarifyingQuestions": an array of objects with "question" and "exampleAnswer" (may be empty)"#
        )
    }

    /// Instruction for stage 2: rewrite the prompt with the chosen technique
    pub fn refine(
        introduction: &str,
        technique_description: &str,
        user_prompt: &str,
        answers: &AnswerSet,
    ) -> String {
        format!(
            r#"Core principles:
{introduction}

Technique to apply:
{technique_description}

Original prompt:
{user_prompt}

Additional information from the user:
{answers}

You are a prompt enhancement tool that rigorously applies the engineering guidelines above. Rewrite the original prompt by:
1. Integrating the context from the core principles, the technique description and the additional information.
2. Increasing specificity, structure and clarity while preserving every element of the original prompt.
3. Writing the result as a standalone, optimized prompt in English.

Constraints:
- Do not add, remove or reinterpret concepts from the original prompt.
- Use only the context given above.
- Output only the final enhanced prompt, with no headers, explanations or markdown.

Example transformation:
Original: "Explain blockchain"
Enhanced: "Describe blockchain technology in 3 steps using a baking analogy for non-technical audiences. Highlight decentralization and security. Avoid cryptocurrency mentions.""#,
            answers = Self::format_answers(answers),
        )
    }

    /// Numbered list of question/answer pairs, or `(none)` when empty
    pub fn format_answers(answers: &AnswerSet) -> String {
        if answers.is_empty() {
            return "(none)".to_string();
        }

        let mut out = String::new();
        for answer in answers.iter() {
            out.push_str(&format!(
                "{}. Q: {}\n   A: {}\n",
                answer.index + 1,
                answer.question,
                answer.answer
            ));
        }
        out
    }
}
