/// A short desk transcript in the shape the answering service echoes back.
pub fn history_fixture() -> &'static str {
    return "Human: Where is my parcel?\nAI: It shipped yesterday and should arrive Friday.\n";
}
