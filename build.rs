use shadow_rs::ShadowBuilder;

fn main() {
    // Generate build metadata for the version endpoint and CLI version string
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}