use crate::types::proposal::ProposalInput;

/// Lowercased `title description tag1 tag2 ...`, the only surface phrases are matched against.
pub fn normalize_text(proposal: &ProposalInput) -> String {
    let mut text = String::with_capacity(
        proposal.title.len()
            + proposal.description.len()
            + proposal.tech_tags.iter().map(|tag| tag.len() + 1).sum::<usize>()
            + 2,
    );
    text.push_str(&proposal.title);
    text.push(' ');
    text.push_str(&proposal.description);
    text.push(' ');
    text.push_str(&proposal.tech_tags.join(" "));
    text.to_lowercase()
}
