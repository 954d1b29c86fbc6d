//! 结构文件的固定外壳（envelope）
//!
//! 只有 `Offers` 子树是动态生成的，其余内容是外部消费方要求的固定结构，
//! 每次保存都逐字节原样拼接，从不解析或修改。

/// `Offers` 之前的固定片段（结构头 + 村民实体的前半部分字段）
pub const FIXED_HEAD: &str = r#"{"name":"","value":[{"name":"format_version","value":1,"type":3},{"name":"size","value":[{"name":"","value":1,"type":3},{"name":"","value":1,"type":3},{"name":"","value":1,"type":3}],"type":9},{"name":"structure","value":[{"name":"block_indices","value":[{"name":"","value":[{"name":"","value":-1,"type":3}],"type":9},{"name":"","value":[{"name":"","value":-1,"type":3}],"type":9}],"type":9},{"name":"entities","value":[{"name":"","value":[{"name":"Air","value":300,"type":2},{"name":"Armor","value":[{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"WasPickedUp","value":0,"type":1}],"type":10}],"type":9},{"name":"Attributes","value":[{"name":"","value":[{"name":"Base","value":20.0,"type":5},{"name":"Current","value":20.0,"type":5},{"name":"DefaultMax","value":20.0,"type":5},{"name":"DefaultMin","value":0.0,"type":5},{"name":"Max","value":20.0,"type":5},{"name":"Min","value":0.0,"type":5},{"name":"Name","value":"minecraft:health","type":8}],"type":10},{"name":"","value":[{"name":"Base","value":128.0,"type":5},{"name":"Current","value":128.0,"type":5},{"name":"DefaultMax","value":2048.0,"type":5},{"name":"DefaultMin","value":0.0,"type":5},{"name":"Max","value":2048.0,"type":5},{"name":"Min","value":0.0,"type":5},{"name":"Name","value":"minecraft:follow_range","type":8}],"type":10},{"name":"","value":[{"name":"Base","value":0.0,"type":5},{"name":"Current","value":0.0,"type":5},{"name":"DefaultMax","value":1.0,"type":5},{"name":"DefaultMin","value":0.0,"type":5},{"name":"Max","value":1.0,"type":5},{"name":"Min","value":0.0,"type":5},{"name":"Name","value":"minecraft:knockback_resistance","type":8}],"type":10},{"name":"","value":[{"name":"Base","value":0.5,"type":5},{"name":"Current","value":0.5,"type":5},{"name":"DefaultMax","value":3.4028235E38,"type":5},{"name":"DefaultMin","value":0.0,"type":5},{"name":"Max","value":3.4028235E38,"type":5},{"name":"Min","value":0.0,"type":5},{"name":"Name","value":"minecraft:movement","type":8}],"type":10},{"name":"","value":[{"name":"Base","value":0.02,"type":5},{"name":"Current","value":0.02,"type":5},{"name":"DefaultMax","value":3.4028235E38,"type":5},{"name":"DefaultMin","value":0.0,"type":5},{"name":"Max","value":3.4028235E38,"type":5},{"name":"Min","value":0.0,"type":5},{"name":"Name","value":"minecraft:underwater_movement","type":8}],"type":10},{"name":"","value":[{"name":"Base","value":0.02,"type":5},{"name":"Current","value":0.02,"type":5},{"name":"DefaultMax","value":3.4028235E38,"type":5},{"name":"DefaultMin","value":0.0,"type":5},{"name":"Max","value":3.4028235E38,"type":5},{"name":"Min","value":0.0,"type":5},{"name":"Name","value":"minecraft:lava_movement","type":8}],"type":10},{"name":"","value":[{"name":"Base","value":0.0,"type":5},{"name":"Current","value":0.0,"type":5},{"name":"DefaultMax","value":16.0,"type":5},{"name":"DefaultMin","value":0.0,"type":5},{"name":"Max","value":16.0,"type":5},{"name":"Min","value":0.0,"type":5},{"name":"Name","value":"minecraft:absorption","type":8}],"type":10},{"name":"","value":[{"name":"Base","value":0.0,"type":5},{"name":"Current","value":0.0,"type":5},{"name":"DefaultMax","value":1024.0,"type":5},{"name":"DefaultMin","value":-1024.0,"type":5},{"name":"Max","value":1024.0,"type":5},{"name":"Min","value":-1024.0,"type":5},{"name":"Name","value":"minecraft:luck","type":8}],"type":10}],"type":9},{"name":"ChestItems","value":[{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"Slot","value":0,"type":1},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"Slot","value":1,"type":1},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"Slot","value":2,"type":1},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"Slot","value":3,"type":1},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"Slot","value":4,"type":1},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"Slot","value":5,"type":1},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"Slot","value":6,"type":1},{"name":"WasPickedUp","value":0,"type":1}],"type":10},{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"Slot","value":7,"type":1},{"name":"WasPickedUp","value":0,"type":1}],"type":10}],"type":9},{"name":"Chested","value":0,"type":1},{"name":"Color","value":0,"type":1},{"name":"Color2","value":0,"type":1},{"name":"Dead","value":0,"type":1},{"name":"DeathTime","value":0,"type":2},{"name":"DwellingUniqueID","value":"00000000-0000-0000-0000-000000000000","type":8},{"name":"FallDistance","value":0.0,"type":5},{"name":"HighTierCuredDiscount","value":0,"type":3},{"name":"HurtTime","value":0,"type":2},{"name":"InventoryVersion","value":"1.21.132","type":8},{"name":"Invulnerable","value":0,"type":1},{"name":"IsAngry","value":0,"type":1},{"name":"IsAutonomous","value":0,"type":1},{"name":"IsBaby","value":0,"type":1},{"name":"IsEating","value":0,"type":1},{"name":"IsGliding","value":0,"type":1},{"name":"IsGlobal","value":0,"type":1},{"name":"IsIllagerCaptain","value":0,"type":1},{"name":"IsInRaid","value":0,"type":1},{"name":"IsOrphaned","value":0,"type":1},{"name":"IsOutOfControl","value":0,"type":1},{"name":"IsPregnant","value":0,"type":1},{"name":"IsRoaring","value":0,"type":1},{"name":"IsScared","value":0,"type":1},{"name":"IsStunned","value":0,"type":1},{"name":"IsSwimming","value":0,"type":1},{"name":"IsTamed","value":0,"type":1},{"name":"IsTrusting","value":0,"type":1},{"name":"LeasherID","value":"-1","type":4},{"name":"LootDropped","value":0,"type":1},{"name":"LowTierCuredDiscount","value":0,"type":3},{"name":"Mainhand","value":[{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"WasPickedUp","value":0,"type":1}],"type":10}],"type":9},{"name":"MarkVariant","value":0,"type":3},{"name":"NaturalSpawn","value":0,"type":1},{"name":"NearbyCuredDiscount","value":0,"type":3},{"name":"NearbyCuredDiscountTimeStamp","value":0,"type":3},"#;

/// `Offers` 之后的固定片段（实体剩余字段 + 调色板 + 世界原点）
pub const FIXED_FOOT: &str = r#",{"name":"Offhand","value":[{"name":"","value":[{"name":"Count","value":0,"type":1},{"name":"Damage","value":0,"type":2},{"name":"Name","value":"","type":8},{"name":"WasPickedUp","value":0,"type":1}],"type":10}],"type":9},{"name":"OnGround","value":1,"type":1},{"name":"OwnerNew","value":"-1","type":4},{"name":"Persistent","value":1,"type":1},{"name":"PortalCooldown","value":0,"type":3},{"name":"Pos","value":[{"name":"","value":-58.5,"type":5},{"name":"","value":-59.0,"type":5},{"name":"","value":-223.5,"type":5}],"type":9},{"name":"PreferredProfession","value":"cartographer","type":8},{"name":"ReactToBell","value":0,"type":1},{"name":"RewardPlayersOnFirstFounding","value":1,"type":1},{"name":"Riches","value":0,"type":3},{"name":"Rotation","value":[{"name":"","value":97.6936,"type":5},{"name":"","value":39.88098,"type":5}],"type":9},{"name":"Saddled","value":0,"type":1},{"name":"Sheared","value":0,"type":1},{"name":"ShowBottom","value":0,"type":1},{"name":"Sitting","value":0,"type":1},{"name":"SkinID","value":2,"type":3},{"name":"SlotDropChances","value":[{"name":"","value":[{"name":"DropChance","value":0.0,"type":5},{"name":"Slot","value":"mainhand","type":8}],"type":10}],"type":9},{"name":"Strength","value":0,"type":3},{"name":"StrengthMax","value":0,"type":3},{"name":"Surface","value":0,"type":1},{"name":"Tags","value":[],"type":9},{"name":"TargetID","value":"-1","type":4},{"name":"TradeExperience","value":0,"type":3},{"name":"TradeTier","value":0,"type":3},{"name":"UniqueID","value":"-317827579897","type":4},{"name":"Variant","value":6,"type":3},{"name":"Willing","value":0,"type":1},{"name":"boundX","value":0,"type":3},{"name":"boundY","value":0,"type":3},{"name":"boundZ","value":0,"type":3},{"name":"canPickupItems","value":0,"type":1},{"name":"definitions","value":[{"name":"","value":"+minecraft:villager_v2","type":8},{"name":"","value":"+villager_skin_2","type":8},{"name":"","value":"+adult","type":8},{"name":"","value":"+cartographer","type":8},{"name":"","value":"+basic_schedule","type":8},{"name":"","value":"-job_specific_goals","type":8}],"type":9},{"name":"hasBoundOrigin","value":0,"type":1},{"name":"hasSetCanPickupItems","value":1,"type":1},{"name":"identifier","value":"minecraft:villager_v2","type":8},{"name":"internalComponents","value":[],"type":10}],"type":10}],"type":9},{"name":"palette","value":[{"name":"default","value":[{"name":"block_palette","value":[],"type":9},{"name":"block_position_data","value":[],"type":10}],"type":10}],"type":10}],"type":10},{"name":"structure_world_origin","value":[{"name":"","value":-59,"type":3},{"name":"","value":-59,"type":3},{"name":"","value":-224,"type":3}],"type":9}],"type":10}"#;

/// 用固定外壳包裹紧凑格式的 `Offers` 节点文本
pub fn wrap_offers(offers_json: &str) -> String {
    let mut out = String::with_capacity(FIXED_HEAD.len() + offers_json.len() + FIXED_FOOT.len());
    out.push_str(FIXED_HEAD);
    out.push_str(offers_json);
    out.push_str(FIXED_FOOT);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_envelope_is_valid_json() {
        let text = wrap_offers(r#"{"name":"Offers","value":[],"type":10}"#);
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("外壳拼接后应为合法JSON");
        assert_eq!(parsed["name"], "");
        assert_eq!(parsed["type"], 10);
    }

    #[test]
    fn test_fragments_frame_entity_fields() {
        assert!(FIXED_HEAD.starts_with(r#"{"name":"","value":[{"name":"format_version""#));
        assert!(FIXED_HEAD.ends_with(r#"{"name":"NearbyCuredDiscountTimeStamp","value":0,"type":3},"#));
        assert!(FIXED_FOOT.starts_with(r#",{"name":"Offhand""#));
        assert!(FIXED_FOOT.contains(r#""value":"minecraft:villager_v2""#));
        assert!(FIXED_FOOT.ends_with(r#""type":9}],"type":10}"#));
    }
}
