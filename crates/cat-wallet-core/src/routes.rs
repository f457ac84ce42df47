use serde::{Deserialize, Serialize};

use crate::domain::{CollectionInfo, TokenBalance};

/// Screens and the navigation payload each one receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    AssetList,
    FeeRate,
    #[serde(rename_all = "camelCase")]
    Collection { collection_id: String },
    #[serde(rename_all = "camelCase")]
    Cat721Item {
        collection_info: CollectionInfo,
        local_id: String,
    },
    #[serde(rename_all = "camelCase")]
    Cat20Token {
        token_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        balance: Option<TokenBalance>,
    },
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::AssetList => "Tokens",
            Route::FeeRate => "Fee Rate",
            Route::Collection { .. } => "Collection",
            Route::Cat721Item { .. } => "NFT",
            Route::Cat20Token { .. } => "Token",
        }
    }
}

/// History of visited screens. The root entry is never popped.
#[derive(Debug, Clone)]
pub struct NavStack {
    stack: Vec<Route>,
}

impl NavStack {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> &Route {
        // The stack always holds the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(screen = route.title(), "navigate");
        self.stack.push(route);
    }

    /// Replace the whole history with a new root, e.g. when switching tabs.
    pub fn reset(&mut self, root: Route) {
        self.stack.clear();
        self.stack.push(root);
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}
