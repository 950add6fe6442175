use chrono::NaiveDate;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::policy::SettlementPolicy;
use crate::settlement::calendar::add_months;
use crate::settlement::effective_date::effective_date;
use crate::types::{GroupId, TransactionId};

/// one entry of a split purchase
#[derive(Debug, Clone, PartialEq)]
pub struct Installment {
    pub id: TransactionId,
    /// 1-based position within the group
    pub number: u32,
    pub total: u32,
    pub group_id: GroupId,
    /// nominal purchase date of this entry
    pub date: NaiveDate,
    pub amount: Money,
    pub effective_date: NaiveDate,
}

/// split a purchase into `count` monthly installments
///
/// Entry `i` is dated `i - 1` calendar months after the purchase (day
/// clamped to the target month) and settles per `policy` like any other
/// card charge. Amounts are `total / count` rounded half-even to the minor
/// unit, with the last entry absorbing the remainder, so the sequence
/// always sums exactly to `total_amount`. The first entry keeps the
/// caller's transaction id so an existing row can be edited in place; the
/// rest get fresh ids. All entries share a newly generated group id.
///
/// Either the full sequence is produced or the call fails; there is no
/// partial result.
pub fn split_into_installments(
    transaction_id: TransactionId,
    transaction_date: NaiveDate,
    total_amount: Money,
    count: u32,
    policy: &SettlementPolicy,
) -> Result<Vec<Installment>> {
    if count < 2 {
        return Err(LedgerError::InvalidInstallmentCount { count });
    }

    let group_id = Uuid::new_v4();
    let amounts = total_amount.split(count);

    let installments = amounts
        .into_iter()
        .enumerate()
        .map(|(i, amount)| {
            let number = i as u32 + 1;
            let date = add_months(transaction_date, i as u32);
            Installment {
                id: if number == 1 { transaction_id } else { Uuid::new_v4() },
                number,
                total: count,
                group_id,
                date,
                amount,
                effective_date: effective_date(date, true, policy),
            }
        })
        .collect();

    Ok(installments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CardBillingPolicy, LegacyDelayPolicy};
    use crate::types::SettlementKind;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn legacy(months: u8) -> SettlementPolicy {
        LegacyDelayPolicy::new(months).unwrap().into()
    }

    #[test]
    fn test_count_below_two_rejected() {
        for count in [0, 1] {
            let err = split_into_installments(
                Uuid::new_v4(),
                date(2024, 1, 15),
                Money::from_major(100),
                count,
                &legacy(1),
            )
            .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidInstallmentCount { .. }));
        }
    }

    #[test]
    fn test_three_way_split_of_hundred() {
        let id = Uuid::new_v4();
        let plan = split_into_installments(
            id,
            date(2024, 1, 31),
            Money::from_major(100),
            3,
            &legacy(0),
        )
        .unwrap();

        assert_eq!(plan.len(), 3);
        // end-of-month clamping, leap-year February
        assert_eq!(plan[0].date, date(2024, 1, 31));
        assert_eq!(plan[1].date, date(2024, 2, 29));
        assert_eq!(plan[2].date, date(2024, 3, 31));

        let amounts: Vec<Money> = plan.iter().map(|e| e.amount).collect();
        assert_eq!(
            amounts,
            vec![
                Money::from_decimal(dec!(33.33)),
                Money::from_decimal(dec!(33.33)),
                Money::from_decimal(dec!(33.34)),
            ]
        );
        assert_eq!(amounts.into_iter().sum::<Money>(), Money::from_major(100));
    }

    #[test]
    fn test_first_entry_keeps_caller_id() {
        let id = Uuid::new_v4();
        let plan =
            split_into_installments(id, date(2024, 5, 10), Money::from_major(60), 4, &legacy(1))
                .unwrap();

        assert_eq!(plan[0].id, id);
        let mut ids: Vec<Uuid> = plan.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_entries_share_group_and_are_numbered() {
        let plan = split_into_installments(
            Uuid::new_v4(),
            date(2024, 5, 10),
            Money::from_major(60),
            4,
            &legacy(1),
        )
        .unwrap();

        let group = plan[0].group_id;
        for (i, entry) in plan.iter().enumerate() {
            assert_eq!(entry.group_id, group);
            assert_eq!(entry.number, i as u32 + 1);
            assert_eq!(entry.total, 4);
        }
    }

    #[test]
    fn test_each_entry_settles_per_card_policy() {
        let policy: SettlementPolicy = CardBillingPolicy::new(15, 5, SettlementKind::BalanceInFull)
            .unwrap()
            .into();
        let plan = split_into_installments(
            Uuid::new_v4(),
            date(2024, 1, 20),
            Money::from_major(300),
            3,
            &policy,
        )
        .unwrap();

        // Jan 20 rolls past the Jan 15 closing; Feb 20 and Mar 20 likewise
        assert_eq!(plan[0].effective_date, date(2024, 3, 5));
        assert_eq!(plan[1].effective_date, date(2024, 4, 5));
        assert_eq!(plan[2].effective_date, date(2024, 5, 5));
    }

    #[test]
    fn test_sum_invariant_over_awkward_amounts() {
        for (amount, count) in [("0.05", 3u32), ("19.99", 7), ("1234.56", 11), ("0.03", 2)] {
            let total = Money::from_str_exact(amount).unwrap();
            let plan = split_into_installments(
                Uuid::new_v4(),
                date(2024, 6, 15),
                total,
                count,
                &legacy(2),
            )
            .unwrap();
            assert_eq!(plan.len(), count as usize);
            assert_eq!(plan.iter().map(|e| e.amount).sum::<Money>(), total);
        }
    }

    #[test]
    fn test_monthly_spacing_preserves_anchor_day() {
        let plan = split_into_installments(
            Uuid::new_v4(),
            date(2024, 10, 31),
            Money::from_major(50),
            5,
            &legacy(1),
        )
        .unwrap();

        let dates: Vec<NaiveDate> = plan.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 10, 31),
                date(2024, 11, 30),
                date(2024, 12, 31),
                date(2025, 1, 31),
                date(2025, 2, 28),
            ]
        );
    }
}
