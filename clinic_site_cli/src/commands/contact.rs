use anyhow::{bail, Result};
use clap::Args;
use clinic_site_lib::{LeadForm, LeadFormState, LeadOutcome, SiteClient};

#[derive(Args)]
pub struct ContactArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Optional message
    #[arg(long, default_value = "")]
    pub message: String,
}

pub async fn run(args: &ContactArgs, client: &SiteClient) -> Result<()> {
    let mut state = LeadFormState::new(LeadForm::new(&args.name, &args.phone, &args.message));
    match client.submit_form(&mut state).await? {
        LeadOutcome::Submitted => {
            println!("Cảm ơn bạn đã liên hệ! Chúng tôi sẽ phản hồi trong thời gian sớm nhất.");
            Ok(())
        }
        LeadOutcome::Failed => bail!("Có lỗi xảy ra. Vui lòng thử lại sau."),
    }
}
