/// search post offices by branch name
use finkit_rs::PostalClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Salt Lake".to_string());

    let client = PostalClient::new();
    let offices = client.by_branch_name(&name).await?;

    for office in offices {
        println!(
            "{}  {} ({}, {})",
            office.pincode,
            office.name,
            office.district.unwrap_or_default(),
            office.state.unwrap_or_default()
        );
    }

    Ok(())
}
