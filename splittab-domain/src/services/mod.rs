mod settlement_reconciler;

pub(crate) use settlement_reconciler::SettlementReconciler;
