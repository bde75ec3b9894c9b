/// Build the meta-prompt for a refinement pass.
///
/// The model receives the current draft plus the requested change and is
/// instructed to apply only that change while keeping structure, length and
/// formatting intact. The result is sent through the regular generation
/// endpoint; correctness of the output is delegated to the model.
pub fn refine_prompt(current_content: &str, instruction: &str) -> String {
    format!(
        "Here is an existing piece of content:\n\n{current_content}\n\n\
         Apply exactly this change: {instruction}\n\n\
         Keep the overall structure, section headings, length and markdown \
         formatting of the original. Do not rewrite parts that the change \
         does not touch. Return only the revised content."
    )
}
