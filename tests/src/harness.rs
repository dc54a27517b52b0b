//! # Protocol Harness
//!
//! Wires every subsystem together the way a deployment would:
//!
//! ```text
//!  reporters ──► [ls-02 quorum] ──OracleForwarder──► [ls-01 oracle]
//!                                                      │  ▲
//!                                      ReturnsSink ────┘  │ DepositCounters
//!                                                         │
//!  users ──► [ls-05 staking] ──► StakingLedger ◄──────────┘
//!                 │    │              ▲
//!                 │    └──► [ls-03 rate engine] ◄── oracle, buffer, queue
//!                 ▼                   │ SurplusReceiver
//!          [ls-04 redemption queue] ──┘
//! ```
//!
//! Every privileged call goes through the access handlers with a named
//! account holding the matching role.

use ls_01_oracle::{OracleAccessHandler, OracleApi, OracleConfig, OracleService};
use ls_02_quorum::{
    OracleForwarder, QuorumAccessHandler, QuorumConfig, QuorumOutcome, QuorumService,
    RoleReporterDirectory,
};
use ls_03_exchange_rate::{ExchangeRateEngine, OracleRecordSource, RateConfig};
use ls_04_redemption_queue::{
    OracleHorizonAdapter, QueueAccessHandler, QueueConfig, RedemptionQueueService,
};
use ls_05_staking::{
    BufferPosition, InMemoryShareToken, NativeBalances, PauseSwitch, QueueBalanceAdapter,
    StakingAccessHandler, StakingAccounts, StakingApi, StakingConfig, StakingLedger,
    StakingService, TokenEscrow, ValidatorDeposit,
};
use shared_types::{
    Address, Amount, BlockClock, BlockNumber, ManualClock, OracleRecord, Role, RoleRegistry,
};
use std::error::Error;
use std::sync::Arc;
use tracing::info;

pub type Oracle = OracleService<StakingLedger, PauseSwitch, StakingLedger, ManualClock>;
pub type Quorum = QuorumService<OracleForwarder<Oracle>, RoleReporterDirectory>;
pub type Queue = RedemptionQueueService<
    OracleHorizonAdapter<Oracle>,
    TokenEscrow<InMemoryShareToken>,
    NativeBalances,
    StakingLedger,
    ManualClock,
>;
pub type Engine =
    ExchangeRateEngine<OracleRecordSource<Oracle>, BufferPosition, QueueBalanceAdapter<Queue>>;
pub type Staking = StakingService<InMemoryShareToken, Queue, Engine>;

pub type HarnessResult<T> = Result<T, Box<dyn Error>>;

pub const ADMIN: Address = [0xAD; 20];
pub const QUORUM_ACCOUNT: Address = [0x02; 20];
pub const ORACLE_MANAGER: Address = [0x11; 20];
pub const PENDING_RESOLVER: Address = [0x12; 20];
pub const QUORUM_MANAGER: Address = [0x21; 20];
pub const QUEUE_MANAGER: Address = [0x41; 20];
pub const QUEUE_ESCROW: Address = [0x4E; 20];
pub const STAKING_CONTRACT: Address = [0x05; 20];
pub const ALLOCATOR: Address = [0x51; 20];
pub const STAKING_MANAGER: Address = [0x52; 20];
pub const REPORTERS: [Address; 3] = [[0xE1; 20], [0xE2; 20], [0xE3; 20]];

/// Per-subsystem configuration for a harness
#[derive(Clone, Debug)]
pub struct ProtocolConfig {
    pub start_height: BlockNumber,
    pub oracle: OracleConfig,
    pub quorum: QuorumConfig,
    pub rate: RateConfig,
    pub queue: QueueConfig,
    pub staking: StakingConfig,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            start_height: 100,
            oracle: OracleConfig {
                initialization_block: 100,
                ..OracleConfig::default()
            },
            quorum: QuorumConfig {
                absolute_threshold: 2,
                ..QuorumConfig::default()
            },
            rate: RateConfig::default(),
            queue: QueueConfig::default(),
            staking: StakingConfig::default(),
        }
    }
}

pub struct ProtocolHarness {
    pub roles: Arc<RoleRegistry>,
    pub clock: Arc<ManualClock>,
    pub ledger: Arc<StakingLedger>,
    pub pause: Arc<PauseSwitch>,
    pub token: Arc<InMemoryShareToken>,
    pub native: Arc<NativeBalances>,
    pub buffer: Arc<BufferPosition>,
    pub oracle: Arc<OracleAccessHandler<Oracle>>,
    pub quorum: QuorumAccessHandler<Quorum>,
    pub queue: Arc<QueueAccessHandler<Queue>>,
    pub engine: Arc<Engine>,
    pub staking: StakingAccessHandler<Staking>,
}

impl ProtocolHarness {
    pub fn new() -> HarnessResult<Self> {
        Self::with_config(ProtocolConfig::default())
    }

    pub fn with_config(config: ProtocolConfig) -> HarnessResult<Self> {
        let roles = Arc::new(RoleRegistry::with_admin(ADMIN));
        let grants = [
            (Role::OracleUpdater, QUORUM_ACCOUNT),
            (Role::OracleManager, ORACLE_MANAGER),
            (Role::OraclePendingResolver, PENDING_RESOLVER),
            (Role::QuorumManager, QUORUM_MANAGER),
            (Role::QueueManager, QUEUE_MANAGER),
            (Role::StakingContract, STAKING_CONTRACT),
            (Role::AllocatorService, ALLOCATOR),
            (Role::StakingManager, STAKING_MANAGER),
        ];
        for (role, account) in grants {
            roles.grant_role(&ADMIN, role, account)?;
        }
        for reporter in REPORTERS {
            roles.grant_role(&ADMIN, Role::Reporter, reporter)?;
        }

        let clock = Arc::new(ManualClock::new(config.start_height));
        let ledger = Arc::new(StakingLedger::new());
        let pause = Arc::new(PauseSwitch::new());
        let token = Arc::new(InMemoryShareToken::new());
        let native = Arc::new(NativeBalances::new());
        let buffer = Arc::new(BufferPosition::default());

        let oracle_service = Arc::new(OracleService::new(
            config.oracle,
            ledger.clone(),
            pause.clone(),
            ledger.clone(),
            clock.clone(),
        )?);
        let oracle = Arc::new(OracleAccessHandler::new(oracle_service.clone(), roles.clone()));

        let quorum_service = QuorumService::new(
            config.quorum,
            Arc::new(OracleForwarder::new(oracle.clone(), QUORUM_ACCOUNT)),
            Arc::new(RoleReporterDirectory::new(roles.clone())),
        )?;
        let quorum = QuorumAccessHandler::new(Arc::new(quorum_service), roles.clone());

        let queue_service = Arc::new(RedemptionQueueService::new(
            config.queue,
            Arc::new(OracleHorizonAdapter::new(oracle_service.clone())),
            Arc::new(TokenEscrow::new(token.clone(), QUEUE_ESCROW)),
            native.clone(),
            ledger.clone(),
            clock.clone(),
        ));
        let queue = Arc::new(QueueAccessHandler::new(queue_service.clone(), roles.clone()));

        let engine = Arc::new(ExchangeRateEngine::new(
            config.rate,
            Arc::new(OracleRecordSource::new(oracle_service)),
            buffer.clone(),
            Arc::new(QueueBalanceAdapter::new(queue_service)),
        )?);

        let staking_service = StakingService::new(
            config.staking,
            StakingAccounts {
                contract: STAKING_CONTRACT,
                queue_escrow: QUEUE_ESCROW,
            },
            ledger.clone(),
            token.clone(),
            queue.clone(),
            engine.clone(),
            pause.clone(),
        )?;
        let staking = StakingAccessHandler::new(Arc::new(staking_service), roles.clone());

        info!(start_height = config.start_height, "[harness] protocol wired");
        Ok(Self {
            roles,
            clock,
            ledger,
            pause,
            token,
            native,
            buffer,
            oracle,
            quorum,
            queue,
            engine,
            staking,
        })
    }

    /// Submit `record` from the first `reporters` reporters, in order
    pub fn report(&self, record: OracleRecord, reporters: usize) -> HarnessResult<Vec<QuorumOutcome>> {
        let mut outcomes = Vec::with_capacity(reporters);
        for reporter in REPORTERS.iter().take(reporters) {
            outcomes.push(self.quorum.submit_report(reporter, record)?);
        }
        Ok(outcomes)
    }

    /// Move the clock past the finality horizon of `end_block`
    pub fn finalize_through(&self, end_block: BlockNumber) {
        let delta = self.oracle.oracle().finalization_block_delta();
        let target = end_block + delta;
        if self.clock.current_height() < target {
            self.clock.set(target);
        }
    }

    /// Stake, allocate and initiate `count` full validators for `staker`
    pub fn fund_validators(&self, staker: &Address, count: u8) -> HarnessResult<Amount> {
        let per_validator = self.staking.staking().config().minimum_deposit_amount;
        let total = per_validator * Amount::from(count);
        self.staking.stake(staker, total, 0)?;
        self.staking.allocate(&ALLOCATOR, 0, total)?;
        let first = self.ledger.balances().num_initiated_validators;
        let deposits = (first..first + u64::from(count))
            .map(|index| ValidatorDeposit {
                pubkey: validator_pubkey(index),
                amount: per_validator,
            })
            .collect();
        Ok(self.staking.initiate_validators(&ALLOCATOR, deposits)?)
    }
}

/// Deterministic 48-byte key for the `index`-th validator
pub fn validator_pubkey(index: u64) -> Vec<u8> {
    let mut pubkey = vec![0xB0; 48];
    pubkey[..8].copy_from_slice(&index.to_be_bytes());
    pubkey
}
