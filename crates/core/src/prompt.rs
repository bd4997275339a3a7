/// Build the instruction sent with both images. The model must answer with a bare integer.
pub fn similarity_prompt(lost_description: &str, found_description: &str) -> String {
    format!(
        "
Analyze the following lost item and found item details.
Lost Item:
Description: {lost_description}
Image 1: [Attached Lost Item Image]

Found Item:
Description: {found_description}
Image 2: [Attached Found Item Image]

Carefully compare the visual details in both images and the information in both descriptions. Determine the likelihood that these are the exact same item.
Respond with ONLY a single integer between 0 and 100 representing the similarity percentage. Do not include '%', explanations, context, or any other text. Just the number.
"
    )
}
