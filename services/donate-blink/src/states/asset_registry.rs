use anchor_lang::prelude::Pubkey;

pub const NATIVE_SYMBOL: &str = "SOL";
pub const NATIVE_DECIMALS: u8 = 9;

/// Native SOL has no mint; quotes are requested for wrapped SOL instead.
/// So11111111111111111111111111111111111111112
pub const WRAPPED_SOL_MINT: Pubkey = Pubkey::new_from_array([
    6, 155, 136, 87, 254, 171, 129, 132, 251, 104, 127, 99, 70, 24, 192, 53, 218, 196, 57, 220,
    26, 235, 59, 85, 152, 160, 240, 0, 0, 0, 0, 1,
]);
/// EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v
pub const USDC_MINT: Pubkey = Pubkey::new_from_array([
    198, 250, 122, 243, 190, 219, 173, 58, 61, 101, 243, 106, 171, 201, 116, 49, 177, 187, 228,
    194, 210, 246, 224, 228, 124, 166, 2, 3, 69, 47, 93, 97,
]);
/// DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263
pub const BONK_MINT: Pubkey = Pubkey::new_from_array([
    188, 7, 197, 110, 96, 173, 61, 63, 23, 115, 130, 234, 198, 84, 143, 186, 31, 211, 44, 253,
    144, 202, 2, 179, 231, 207, 161, 133, 253, 206, 115, 152,
]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Native,
    Token { mint: Pubkey },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub symbol: &'static str,
    pub kind: AssetKind,
    pub decimals: u8,
}

impl Asset {
    pub const fn native() -> Self {
        Self {
            symbol: NATIVE_SYMBOL,
            kind: AssetKind::Native,
            decimals: NATIVE_DECIMALS,
        }
    }

    pub const fn token(symbol: &'static str, mint: Pubkey, decimals: u8) -> Self {
        Self {
            symbol,
            kind: AssetKind::Token { mint },
            decimals,
        }
    }

    pub fn is_native(&self) -> bool {
        self.kind == AssetKind::Native
    }

    pub fn mint(&self) -> Option<Pubkey> {
        match self.kind {
            AssetKind::Native => None,
            AssetKind::Token { mint } => Some(mint),
        }
    }

    /// Mint used when asking the price service for a quote.
    pub fn price_mint(&self) -> Pubkey {
        self.mint().unwrap_or(WRAPPED_SOL_MINT)
    }
}

/// Immutable table of the assets a donation can be made in. Entry order is
/// the order the wallet shows them in.
#[derive(Clone, Debug)]
pub struct AssetRegistry {
    assets: Vec<Asset>,
    selected: &'static str,
}

impl AssetRegistry {
    pub fn new(assets: Vec<Asset>, selected: &'static str) -> Self {
        Self { assets, selected }
    }

    pub fn mainnet() -> Self {
        Self::new(
            vec![
                Asset::token("USDC", USDC_MINT, 6),
                Asset::native(),
                Asset::token("BONK", BONK_MINT, 5),
            ],
            "USDC",
        )
    }

    pub fn get(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Symbol pre-selected in the wallet's token picker.
    pub fn selected(&self) -> &'static str {
        self.selected
    }

    pub fn price_mints(&self) -> Vec<Pubkey> {
        self.assets.iter().map(Asset::price_mint).collect()
    }
}
