pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const FILE: &str = "📄";
    pub const DATABASE: &str = "🗄️";
    pub const MAG: &str = "🔎";
}
