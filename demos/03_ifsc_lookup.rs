/// look up a bank branch by ifsc code
use finkit_rs::IfscClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let code = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "HDFC0000001".to_string());

    let client = IfscClient::new();
    let branch = client.lookup(&code).await?;

    println!("bank:    {}", branch.bank);
    println!("branch:  {}", branch.branch);
    println!("city:    {}", branch.city.unwrap_or_default());
    println!("state:   {}", branch.state.unwrap_or_default());
    println!("address: {}", branch.address.unwrap_or_default());
    println!("micr:    {}", branch.micr.unwrap_or_default());
    println!(
        "imps: {}  rtgs: {}  neft: {}  upi: {}",
        branch.imps, branch.rtgs, branch.neft, branch.upi
    );

    Ok(())
}
