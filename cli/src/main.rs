use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use client::api::{appointments, auth, merchants, properties, reviews, users, wishlist};
use client::api::appointments::AppointmentQuery;
use client::api::properties::PropertyQuery;
use client::api::users::Page;
use client::{ApiClient, ApiError, ClientConfig, Session, SessionStore};
use listings::{NewAgent, NewAppointment, NewProperty, NewUser, Role, TimeSlot};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("please fill all required fields")]
    IncompleteForm,
    #[error("not signed in; log in first")]
    NotSignedIn,
    #[error("no avatar endpoint for {0}")]
    NoAvatarEndpoint(Role),
}

#[derive(Parser, Debug)]
#[command(name = "hearth", about = "Hearth real-estate marketplace CLI")]
struct Cli {
    #[arg(long, env = "HEARTH_BASE_URL", default_value = client::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "HEARTH_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store credentials under the role the server returns.
    Login {
        email: String,
        password: String,
    },
    /// Clear stored credentials for one role, or all roles.
    Logout {
        #[arg(long)]
        role: Option<Role>,
    },
    /// Register a user account (requires an agent session).
    Register(RegisterArgs),
    Properties(PropertiesCommand),
    Wishlist(WishlistCommand),
    Appointments(AppointmentsCommand),
    Agents(AgentsCommand),
    Users(UsersCommand),
    Reviews(ReviewsCommand),
    Profile(ProfileCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    password: String,
}

#[derive(Args, Debug)]
struct PropertiesCommand {
    #[command(subcommand)]
    command: PropertiesSubcommand,
}

#[derive(Subcommand, Debug)]
enum PropertiesSubcommand {
    /// List properties matching a filter.
    List {
        #[arg(long)]
        agent: Option<String>,
        #[arg(long)]
        merchant: Option<String>,
        #[arg(long)]
        verified: Option<bool>,
        #[arg(long)]
        page: Option<u64>,
        #[arg(long)]
        limit: Option<u64>,
    },
    /// The browse screen: verified listings plus bought properties,
    /// tagged with market status. Needs agent and user sessions.
    Browse,
    Show {
        property_id: String,
    },
    Create(CreatePropertyArgs),
    /// Update a listing with a JSON object of changed fields.
    Update {
        property_id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        property_id: String,
    },
    /// Upload listing photos.
    UploadImages {
        property_id: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Buy a property as the signed-in user.
    Buy {
        property_id: String,
    },
}

#[derive(Args, Debug)]
struct CreatePropertyArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    price: f64,
    #[arg(long, default_value = "NIGERIA")]
    country: String,
    #[arg(long, default_value = "ABUJA")]
    state: String,
    #[arg(long)]
    city: String,
    #[arg(long, default_value = "34.27822")]
    lat: String,
    #[arg(long, default_value = "-118.3455")]
    lng: String,
    #[arg(long)]
    address: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "FLAT")]
    category: String,
    #[arg(long)]
    total_area: String,
    #[arg(long, default_value = "RESIDENTIAL")]
    property_use: String,
    #[arg(long, default_value = "PER_ANNUM")]
    payment_plan: String,
    #[arg(long = "type", default_value = "RENT")]
    listing_type: String,
    #[arg(long)]
    bedroom: i64,
    #[arg(long)]
    bathroom: i64,
    #[arg(long, default_value_t = 3)]
    toilet: i64,
    #[arg(long, default_value_t = 4)]
    parking_space: i64,
    #[arg(long, default_value = "FURNISHED")]
    furnishing: String,
    #[arg(long, default_value = "")]
    disclaimer: String,
    /// Comma-separated list, e.g. "Gym, Swimming Pool, 24/7 Security".
    #[arg(long, default_value = "")]
    amenities: String,
    /// Managing agent id; defaults to the signed-in agent.
    #[arg(long)]
    agent: Option<String>,
    /// Owning merchant id.
    #[arg(long)]
    merchant: Option<String>,
}

#[derive(Args, Debug)]
struct WishlistCommand {
    #[command(subcommand)]
    command: WishlistSubcommand,
}

#[derive(Subcommand, Debug)]
enum WishlistSubcommand {
    /// Saved properties for the signed-in user (or merchant).
    List {
        #[arg(long, default_value_t = false)]
        merchant: bool,
    },
    /// Save a property for the current identity.
    Add {
        property_id: String,
    },
}

#[derive(Args, Debug)]
struct AppointmentsCommand {
    #[command(subcommand)]
    command: AppointmentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AppointmentsSubcommand {
    /// Open appointments for an agent (defaults to the signed-in agent).
    List {
        #[arg(long)]
        agent: Option<String>,
        #[arg(long, default_value_t = false)]
        completed: bool,
        #[arg(long, default_value_t = 0)]
        page: u64,
        #[arg(long, default_value_t = 10)]
        limit: u64,
    },
    /// Book a viewing as the signed-in user.
    Book {
        #[arg(long)]
        property_id: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "")]
        msg: String,
    },
    Confirm {
        appointment_id: String,
    },
    Complete {
        appointment_id: String,
    },
    Cancel {
        appointment_id: String,
    },
}

#[derive(Args, Debug)]
struct AgentsCommand {
    #[command(subcommand)]
    command: AgentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AgentsSubcommand {
    List {
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long, default_value_t = 20)]
        limit: u64,
    },
    /// Look up one agent (pages through the roster) and their verified
    /// listings.
    Show {
        agent_id: String,
    },
    Create {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    /// Mark an agent verified (or revoke with --revoke).
    Verify {
        agent_id: String,
        #[arg(long, default_value_t = false)]
        revoke: bool,
    },
    Delete {
        agent_id: String,
    },
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List {
        #[arg(long, default_value_t = 0)]
        page: u64,
        #[arg(long, default_value_t = 5)]
        limit: u64,
    },
    Show {
        user_id: String,
    },
    /// Create a user account as the signed-in merchant.
    Create(RegisterArgs),
    /// Update a user with a JSON object of changed fields.
    Update {
        user_id: String,
        #[arg(long)]
        data: String,
    },
}

#[derive(Args, Debug)]
struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReviewsSubcommand {
    /// Reviews for one property.
    List {
        property_id: String,
        #[arg(long, default_value_t = 0)]
        page: u64,
        #[arg(long, default_value_t = 10)]
        limit: u64,
    },
    /// Post a review as the current identity.
    Post {
        property_id: String,
        #[arg(long)]
        text: String,
    },
    Edit {
        review_id: String,
        #[arg(long)]
        text: String,
    },
    Delete {
        review_id: String,
    },
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    /// The signed-in identity and its stored profile.
    Show,
    /// Upload a profile picture for the current identity.
    UploadAvatar {
        file: PathBuf,
        #[arg(long)]
        role: Option<Role>,
    },
}

/// Everything a command handler needs: the HTTP client plus the loaded
/// session and its store.
struct AppContext {
    api: ApiClient,
    session: Session,
    store: SessionStore,
}

impl AppContext {
    fn current(&self) -> Result<&client::Credentials, CliError> {
        self.session.current_identity().ok_or(CliError::NotSignedIn)
    }

    fn any_token(&self) -> Result<&str, CliError> {
        self.session
            .any_token()
            .map(|(_, token)| token)
            .ok_or(CliError::NotSignedIn)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    config.base_url = cli.base_url.trim_end_matches('/').to_owned();
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }

    let store = SessionStore::new(config.session_file.clone());
    let ctx = AppContext { api: ApiClient::new(&config)?, session: store.load()?, store };

    match cli.command {
        Command::Login { email, password } => run_login(ctx, &email, &password).await,
        Command::Logout { role } => run_logout(ctx, role),
        Command::Register(args) => run_register(&ctx, args).await,
        Command::Properties(cmd) => run_properties(&ctx, cmd).await,
        Command::Wishlist(cmd) => run_wishlist(&ctx, cmd).await,
        Command::Appointments(cmd) => run_appointments(&ctx, cmd).await,
        Command::Agents(cmd) => run_agents(&ctx, cmd).await,
        Command::Users(cmd) => run_users(&ctx, cmd).await,
        Command::Reviews(cmd) => run_reviews(&ctx, cmd).await,
        Command::Profile(cmd) => run_profile(&ctx, cmd).await,
    }
}

// =============================================================================
// AUTH
// =============================================================================

async fn run_login(mut ctx: AppContext, email: &str, password: &str) -> Result<(), CliError> {
    let data = auth::login(&ctx.api, email, password).await?;
    let role = ctx.session.apply_login(&data)?;
    ctx.store.save(&ctx.session)?;

    eprintln!("login successful; signed in as {role}");
    eprintln!("dashboard: hearth {} --help", dashboard_hint(role));
    Ok(())
}

fn dashboard_hint(role: Role) -> &'static str {
    match role {
        Role::Agent => "properties",
        Role::Merchant => "agents",
        Role::User => "appointments",
    }
}

fn run_logout(mut ctx: AppContext, role: Option<Role>) -> Result<(), CliError> {
    ctx.session.clear(role);
    ctx.store.save(&ctx.session)?;
    eprintln!("logged out");
    Ok(())
}

async fn run_register(ctx: &AppContext, args: RegisterArgs) -> Result<(), CliError> {
    let form = NewUser {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        password: args.password,
    };
    if !form.is_complete() {
        return Err(CliError::IncompleteForm);
    }

    let token = ctx.session.require_token(Role::Agent)?;
    let user = users::create_user(&ctx.api, token, &form).await?;
    eprintln!("account created");
    print_json(&serde_json::to_value(&user)?)
}

// =============================================================================
// PROPERTIES
// =============================================================================

async fn run_properties(ctx: &AppContext, cmd: PropertiesCommand) -> Result<(), CliError> {
    match cmd.command {
        PropertiesSubcommand::List { agent, merchant, verified, page, limit } => {
            let query = PropertyQuery { agent, merchant, verified, page, limit };
            let token = ctx.any_token()?;
            let listings = properties::list_properties(&ctx.api, token, &query).await?;
            print_json(&serde_json::to_value(&listings)?)
        }
        PropertiesSubcommand::Browse => {
            let agent = ctx.session.credentials(Role::Agent).ok_or(ApiError::MissingToken { role: Role::Agent })?;
            let user = ctx.session.credentials(Role::User).ok_or(ApiError::MissingToken { role: Role::User })?;
            let merged =
                properties::browse(&ctx.api, &agent.id, &agent.token, &user.id, &user.token).await?;
            print_json(&serde_json::to_value(&merged)?)
        }
        PropertiesSubcommand::Show { property_id } => {
            let token = ctx.any_token()?;
            let property = properties::get_property(&ctx.api, token, &property_id).await?;
            print_json(&serde_json::to_value(&property)?)
        }
        PropertiesSubcommand::Create(args) => {
            let agent_id = args
                .agent
                .or_else(|| ctx.session.credentials(Role::Agent).map(|c| c.id.clone()))
                .unwrap_or_default();
            let listing = NewProperty {
                name: args.name,
                price: args.price,
                country: args.country,
                state: args.state,
                city: args.city,
                lat: args.lat,
                lng: args.lng,
                address: args.address,
                description: args.description,
                category: args.category,
                total_area: args.total_area,
                property_use: args.property_use,
                payment_plan: args.payment_plan,
                listing_type: args.listing_type,
                bedroom: args.bedroom,
                bathroom: args.bathroom,
                toilet: args.toilet,
                parking_space: args.parking_space,
                furnishing: args.furnishing,
                disclaimer: args.disclaimer,
                amenities: NewProperty::split_amenities(&args.amenities),
                merchant: args.merchant.unwrap_or_default(),
                agent: agent_id,
            };
            let token = ctx.any_token()?;
            let property = properties::create_property(&ctx.api, token, &listing).await?;
            eprintln!("property created");
            print_json(&serde_json::to_value(&property)?)
        }
        PropertiesSubcommand::Update { property_id, data } => {
            let fields = serde_json::from_str::<Value>(&data)?;
            let token = ctx.session.require_token(Role::Agent)?;
            let property = properties::update_property(&ctx.api, token, &property_id, fields).await?;
            eprintln!("property updated");
            print_json(&serde_json::to_value(&property)?)
        }
        PropertiesSubcommand::Delete { property_id } => {
            let token = ctx.session.require_token(Role::Agent)?;
            properties::delete_property(&ctx.api, token, &property_id).await?;
            eprintln!("property deleted");
            Ok(())
        }
        PropertiesSubcommand::UploadImages { property_id, files } => {
            let token = ctx.session.require_token(Role::Agent)?;
            let result = properties::upload_images(&ctx.api, token, &property_id, &files).await?;
            eprintln!("images uploaded");
            print_json(&result)
        }
        PropertiesSubcommand::Buy { property_id } => {
            let user = ctx
                .session
                .credentials(Role::User)
                .ok_or(ApiError::MissingToken { role: Role::User })?;
            let receipt =
                properties::buy_property(&ctx.api, &user.token, &property_id, &user.id).await?;
            eprintln!("property purchase successful");
            print_json(&receipt)
        }
    }
}

// =============================================================================
// WISHLIST
// =============================================================================

async fn run_wishlist(ctx: &AppContext, cmd: WishlistCommand) -> Result<(), CliError> {
    match cmd.command {
        WishlistSubcommand::List { merchant: false } => {
            let user = ctx
                .session
                .credentials(Role::User)
                .ok_or(ApiError::MissingToken { role: Role::User })?;
            let items = wishlist::user_wishlist(&ctx.api, &user.token, &user.id).await?;
            print_json(&serde_json::to_value(&items)?)
        }
        WishlistSubcommand::List { merchant: true } => {
            let merchant = ctx
                .session
                .credentials(Role::Merchant)
                .ok_or(ApiError::MissingToken { role: Role::Merchant })?;
            let items =
                merchants::merchant_wishlist(&ctx.api, &merchant.token, &merchant.id).await?;
            print_json(&serde_json::to_value(&items)?)
        }
        WishlistSubcommand::Add { property_id } => {
            let identity = ctx.current()?;
            wishlist::add_to_wishlist(&ctx.api, &identity.token, &property_id, &identity.id).await?;
            eprintln!("property added to wishlist");
            Ok(())
        }
    }
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

async fn run_appointments(ctx: &AppContext, cmd: AppointmentsCommand) -> Result<(), CliError> {
    match cmd.command {
        AppointmentsSubcommand::List { agent, completed, page, limit } => {
            let agent = match agent {
                Some(agent) => agent,
                None => ctx
                    .session
                    .credentials(Role::Agent)
                    .map(|c| c.id.clone())
                    .ok_or(ApiError::MissingToken { role: Role::Agent })?,
            };
            let query = AppointmentQuery { agent, completed, page, limit };
            let token = ctx.any_token()?;
            let appointments = appointments::list_appointments(&ctx.api, token, &query).await?;
            print_json(&serde_json::to_value(&appointments)?)
        }
        AppointmentsSubcommand::Book { property_id, date, from, to, msg } => {
            let user = ctx
                .session
                .credentials(Role::User)
                .ok_or(ApiError::MissingToken { role: Role::User })?;
            let booking = NewAppointment {
                property_id,
                user_id: user.id.clone(),
                date,
                msg,
                time: TimeSlot { from, to },
            };
            if !booking.is_complete() {
                return Err(CliError::IncompleteForm);
            }
            let appointment = appointments::book_appointment(&ctx.api, &user.token, &booking).await?;
            eprintln!("appointment created");
            print_json(&serde_json::to_value(&appointment)?)
        }
        AppointmentsSubcommand::Confirm { appointment_id } => {
            let token = ctx.any_token()?;
            appointments::confirm_meeting(&ctx.api, token, &appointment_id).await?;
            eprintln!("appointment confirmed");
            Ok(())
        }
        AppointmentsSubcommand::Complete { appointment_id } => {
            let token = ctx.any_token()?;
            appointments::complete_appointment(&ctx.api, token, &appointment_id).await?;
            eprintln!("appointment marked as completed");
            Ok(())
        }
        AppointmentsSubcommand::Cancel { appointment_id } => {
            let token = ctx.any_token()?;
            appointments::cancel_appointment(&ctx.api, token, &appointment_id).await?;
            eprintln!("appointment deleted");
            Ok(())
        }
    }
}

// =============================================================================
// AGENTS (merchant dashboard)
// =============================================================================

async fn run_agents(ctx: &AppContext, cmd: AgentsCommand) -> Result<(), CliError> {
    match cmd.command {
        AgentsSubcommand::List { offset, limit } => {
            let token = ctx.session.require_token(Role::Merchant)?;
            let agents = merchants::list_agents(&ctx.api, token, offset, limit).await?;
            print_json(&serde_json::to_value(&agents)?)
        }
        AgentsSubcommand::Show { agent_id } => {
            let token = ctx.session.require_token(Role::Merchant)?;
            let agent = merchants::find_agent(&ctx.api, token, &agent_id).await?;
            print_json(&serde_json::to_value(&agent)?)?;

            let query = PropertyQuery {
                agent: Some(agent_id),
                verified: Some(true),
                ..PropertyQuery::default()
            };
            let listings = properties::list_properties(&ctx.api, token, &query).await?;
            print_json(&serde_json::to_value(&listings)?)
        }
        AgentsSubcommand::Create { full_name, company, email, phone, password } => {
            let form = NewAgent { full_name, company, email, phone, password };
            if !form.is_complete() {
                return Err(CliError::IncompleteForm);
            }
            let token = ctx.session.require_token(Role::Merchant)?;
            let agent = merchants::create_agent(&ctx.api, token, &form).await?;
            eprintln!("agent created");
            print_json(&serde_json::to_value(&agent)?)
        }
        AgentsSubcommand::Verify { agent_id, revoke } => {
            let token = ctx.session.require_token(Role::Merchant)?;
            merchants::verify_agent(&ctx.api, token, &agent_id, !revoke).await?;
            eprintln!("agent verification updated");
            Ok(())
        }
        AgentsSubcommand::Delete { agent_id } => {
            let token = ctx.session.require_token(Role::Merchant)?;
            merchants::delete_agent(&ctx.api, token, &agent_id).await?;
            eprintln!("agent deleted");
            Ok(())
        }
    }
}

// =============================================================================
// USERS (merchant / agent dashboards)
// =============================================================================

async fn run_users(ctx: &AppContext, cmd: UsersCommand) -> Result<(), CliError> {
    match cmd.command {
        UsersSubcommand::List { page, limit } => {
            let token = ctx.any_token()?;
            let found = users::list_users(&ctx.api, token, Page { page, limit }).await?;
            print_json(&serde_json::to_value(&found)?)
        }
        UsersSubcommand::Show { user_id } => {
            let token = ctx.any_token()?;
            let user = users::get_user(&ctx.api, token, &user_id).await?;
            print_json(&serde_json::to_value(&user)?)
        }
        UsersSubcommand::Create(args) => {
            let form = NewUser {
                first_name: args.first_name,
                last_name: args.last_name,
                email: args.email,
                phone: args.phone,
                password: args.password,
            };
            if !form.is_complete() {
                return Err(CliError::IncompleteForm);
            }
            let token = ctx.session.require_token(Role::Merchant)?;
            let user = users::create_user(&ctx.api, token, &form).await?;
            eprintln!("user created");
            print_json(&serde_json::to_value(&user)?)
        }
        UsersSubcommand::Update { user_id, data } => {
            let fields = serde_json::from_str::<Value>(&data)?;
            let token = ctx.any_token()?;
            let user = users::update_user(&ctx.api, token, &user_id, fields).await?;
            eprintln!("user updated");
            print_json(&serde_json::to_value(&user)?)
        }
    }
}

// =============================================================================
// REVIEWS
// =============================================================================

async fn run_reviews(ctx: &AppContext, cmd: ReviewsCommand) -> Result<(), CliError> {
    match cmd.command {
        ReviewsSubcommand::List { property_id, page, limit } => {
            let token = ctx.any_token()?;
            let found = reviews::list_reviews(&ctx.api, token, &property_id, page, limit).await?;
            print_json(&serde_json::to_value(&found)?)
        }
        ReviewsSubcommand::Post { property_id, text } => {
            let identity = ctx.current()?;
            let review =
                reviews::post_review(&ctx.api, &identity.token, &property_id, &identity.id, &text)
                    .await?;
            print_json(&serde_json::to_value(&review)?)
        }
        ReviewsSubcommand::Edit { review_id, text } => {
            let token = ctx.any_token()?;
            let review = reviews::update_review(&ctx.api, token, &review_id, &text).await?;
            print_json(&serde_json::to_value(&review)?)
        }
        ReviewsSubcommand::Delete { review_id } => {
            let token = ctx.any_token()?;
            reviews::delete_review(&ctx.api, token, &review_id).await?;
            eprintln!("review deleted");
            Ok(())
        }
    }
}

// =============================================================================
// PROFILE
// =============================================================================

async fn run_profile(ctx: &AppContext, cmd: ProfileCommand) -> Result<(), CliError> {
    match cmd.command {
        ProfileSubcommand::Show => {
            let identity = ctx.current()?;
            print_json(&serde_json::json!({
                "role": identity.role,
                "id": identity.id,
                "profile": identity.profile,
            }))
        }
        ProfileSubcommand::UploadAvatar { file, role } => {
            let role = match role {
                Some(role) => role,
                None => ctx.current()?.role,
            };
            let identity = ctx
                .session
                .credentials(role)
                .ok_or(ApiError::MissingToken { role })?;

            let result = match role {
                Role::User => {
                    users::upload_avatar(&ctx.api, &identity.token, &identity.id, &file).await?
                }
                Role::Agent => {
                    merchants::upload_agent_avatar(&ctx.api, &identity.token, &identity.id, &file)
                        .await?
                }
                Role::Merchant => return Err(CliError::NoAvatarEndpoint(role)),
            };
            eprintln!("profile picture updated");
            print_json(&result)
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
