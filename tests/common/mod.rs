//! Reference vectors shared by the integration tests

#![allow(dead_code)]

use vbk_codec::*;

/// Altchain block at height 1466
pub const ALT_BLOCK: &str = "201fec8aa4983d69395010e4d18cd8b943749d5b4f575e88a375debdc5ed22531c201aaaaaaaaaaaa9395010e4d18cd8\
    b943749d5b4f575e88a375debdc5ed22531c000005ba0000009c";
/// VeriBlock block at height 5000, nonce 1
pub const VBK_BLOCK: &str = "41000013880002449c60619294546ad825af03b0935637860679ddd55ee4fd21082e18686e26bbfda7d5e4462ef24ae0\
    2d67e47d785c9b90f3010100000000000001";
/// Bitcoin header at version 0x20000000
pub const BTC_BLOCK: &str = "500000002000000000000000b345b7bbf29bda1507a679b97967f99a10ab0088899529def75e16e6cef738a2eba1fe74\
    09318e3f558bec325392427aa3d8eaf46b028654f82213b75c841a011a2e00f29a";
/// Publication data with ascii payloads
pub const PUBLICATION_DATA: &str = "0100010c6865616465722062797465730112636f6e7465787420696e666f20627974657301117061796f757420696e66\
    6f206279746573";
/// ATV signed by V5Ujv72h4jEBcKnALGc4fKqs6CDAPX
pub const ATV: &str = "0000000101580101166772f51ab208d32771ab1506970eeb664462730b838e0203e800010701370100010c6865616465\
    722062797465730112636f6e7465787420696e666f20627974657301117061796f757420696e666f2062797465734630\
    440220398b74708dc8f8aee68fce0c47b8959e6fce6354665da3ed87a83f708e62aa6b02202e6c00c00487763c55e92c\
    7b8e1dd538b7375d8df2b2117e75acbb9db7deb3c7583056301006072a8648ce3d020106052b8104000a03420004de4e\
    e8300c3cd99e913536cf53c4add179f048f8fe90e5adf3ed19668dd1dbf6c2d8e692b1d36eac7187950620a28838da60\
    a8c9dd60190c14c59b82cb90319e04000000010400000000201fec8aa4983d69395010e4d18cd8b943749d5b4f575e88\
    a375debdc5ed22531c040000000220000000000000000000000000000000000000000000000000000000000000000020\
    000000000000000000000000000000000000000000000000000000000000000041000013880002449c60619294546ad8\
    25af03b0935637860679ddd55ee4fd21082e18686e26bbfda7d5e4462ef24ae02d67e47d785c9b90f301010000000000\
    0001";
/// VTB publishing a VeriBlock block into Bitcoin
pub const VTB: &str = "0000000102046102011667ff0a897e5d512a0b6da2f41c479867fe6b3a4cae2641000013350002a793c872d6f6460e90\
    bed62342bb968195f8c515d3eed7277a09efac4be99f95f0a15628b06ba3b44c0190b5c0495c9b8acd0701c523005ebb\
    be9c02011b01000000010ce74f1fb694a001eebb1d7d08ce6208033f5bf7263ebad2de07bbf518672732000000006a47\
    304402200cf4998aba1682abeb777e762807a9dd2635a0b77773f66491b83ee3c87099ba022033b7ca24dc520915b8b0\
    200cbdcf95ba6ae866354585af9c53ee86f27362ebec012103e5baf0709c395a82ef0bd63bc8847564ac201d69a8e6bf\
    448d87aa53a1c431aaffffffff02b7270d00000000001976a9148b9ea8545059f3a922457afd14ddf3855d8b109988ac\
    0000000000000000536a4c50000013350002a793c872d6f6460e90bed62342bb968195f8c515d3eed7277a09efac4be9\
    9f95f0a15628b06ba3b44c0190b5c0495c9b8acd0701c5235ebbbe9cd4e943efe1864df04216615cf92083f400000000\
    02019f040000067b040000000c040000000400000020204d66077fdf24246ffd6b6979dfedef5d46588654addeb35edb\
    11e993c131f61220023d1abe8758c6f917ec0c65674bbd43d66ee14dc667b3117dfc44690c6f5af120096ddba03ca952\
    af133fb06307c24171e53bf50ab76f1edeabde5e99f78d4ead202f32cf1bee50349d56fc1943af84f2d2abda520f64dc\
    4db37b2f3db20b0ecb572093e70120f1b539d0c1495b368061129f30d35f9e436f32d69967ae86031a275620f554378a\
    116e2142f9f6315a38b19bd8a1b2e6dc31201f2d37a058f03c39c06c200824705685ceca003c95140434ee9d8bbbf447\
    4b83fd4ecc2766137db9a44d7420b7b9e52f3ee8ce4fbb8be7d6cf66d33a20293f806c69385136662a74453fb1622017\
    32c9a35e80d4796babea76aace50b49f6079ea3e349f026b4491cfe720ad17202d9b57e92ab51fe28a587050fd82abb3\
    0abd699a5ce8b54e7cd49b2a827bcb9920dcba229acdc6b7f028ba756fd5abbfebd31b4227cd4137d728ec5ea56c4576\
    18202cf1439a6dbcc1a35e96574bddbf2c5db9174af5ad0d278fe92e06e4ac349a42500000c020000000000000000000\
    14297d038cb54bfa964b44fb9a2d9853eb5936d4094f13a5e4a299b6c0cbdac21e997d74a999c26acd68c34bdfb527b1\
    0ddd779a1a0bceb3919b5c6c1f2c1773703bc0010350000080200000000000000000000d5efbd7dc73f09e8aaf064d1a\
    76142d4bac4e9dcc61fc255eefbc6d8670ee98c583aeed677f27fc239c41f93ee411add001b1d40815a3268b9b5c6c1f\
    2c17e11874af500000402000000000000000000013535112250e115e2896e4f602c353d839443080398e3f1dfb5f1e89\
    109ef8508bde5404cf244a6372f402e0cf9d8dbd818326222ca739e08d9b5c6c1f2c1744290a92500000002000000000\
    00000000002274473227b7674bd6a5b17dd3316a827f5a34402ea4ba2b36128b600bbb488ec6595eb2bb808425dea85f\
    b83a63267b643406bed63aa310919b5c6c1f2c1749c4d1f0473045022100f4dce45edcc6bfc4a1f44ef04e47e90a348e\
    fd471f742f18b882ac77a8d0e89e0220617cf7c4a22211991687b17126c1bb007a3b2a25c550f75d66b857a8fd9d75e7\
    583056301006072a8648ce3d020106052b8104000a03420004b3c10470c8e8e426f1937758d9fb5e97a1891176cb37d4\
    c12d4af4107b1aa3e8a8a754c06a22760e44c60642fba883967c19740d5231336326f7962750c8df9904000000000400\
    00000d202a014e88ed7ab65cdfaa85daeab07eea6cba5e147f736edd8d02c2f9ddf0dec60400000006205b977ea09a55\
    4ad56957f662284044e7d37450ddadf7db3647712f59693997872020d0a3d873eeeee6a222a75316dce60b53ca43eaea\
    09d27f0ece897303a53ae920c06fe913dca5dc2736563b80834d69e6dfdf1b1e92383ea62791e410421b6c1120049f68\
    d350eeb8b3df630c8308b5c8c2ba4cd6210868395b084af84d19ff0e9020000000000000000000000000000000000000\
    00000000000000000000000000002036252dfc621de420fb083ad9d8767cba627eddeec64e421e9576cee21297dd0a41\
    000013880002449c60619294546ad825af03b0935637860679ddd55ee4fd21082e18686e26bbfda7d5e4462ef24ae02d\
    67e47d785c9b90f3010100000000000001";
/// One context block, the VTB above and the ATV above
pub const POP_DATA: &str = "00000001010141000013880002449c60619294546ad825af03b0935637860679ddd55ee4fd21082e18686e26bbfda7d5\
    e4462ef24ae02d67e47d785c9b90f301010000000000000101010000000102046102011667ff0a897e5d512a0b6da2f4\
    1c479867fe6b3a4cae2641000013350002a793c872d6f6460e90bed62342bb968195f8c515d3eed7277a09efac4be99f\
    95f0a15628b06ba3b44c0190b5c0495c9b8acd0701c523005ebbbe9c02011b01000000010ce74f1fb694a001eebb1d7d\
    08ce6208033f5bf7263ebad2de07bbf518672732000000006a47304402200cf4998aba1682abeb777e762807a9dd2635\
    a0b77773f66491b83ee3c87099ba022033b7ca24dc520915b8b0200cbdcf95ba6ae866354585af9c53ee86f27362ebec\
    012103e5baf0709c395a82ef0bd63bc8847564ac201d69a8e6bf448d87aa53a1c431aaffffffff02b7270d0000000000\
    1976a9148b9ea8545059f3a922457afd14ddf3855d8b109988ac0000000000000000536a4c50000013350002a793c872\
    d6f6460e90bed62342bb968195f8c515d3eed7277a09efac4be99f95f0a15628b06ba3b44c0190b5c0495c9b8acd0701\
    c5235ebbbe9cd4e943efe1864df04216615cf92083f40000000002019f040000067b040000000c040000000400000020\
    204d66077fdf24246ffd6b6979dfedef5d46588654addeb35edb11e993c131f61220023d1abe8758c6f917ec0c65674b\
    bd43d66ee14dc667b3117dfc44690c6f5af120096ddba03ca952af133fb06307c24171e53bf50ab76f1edeabde5e99f7\
    8d4ead202f32cf1bee50349d56fc1943af84f2d2abda520f64dc4db37b2f3db20b0ecb572093e70120f1b539d0c1495b\
    368061129f30d35f9e436f32d69967ae86031a275620f554378a116e2142f9f6315a38b19bd8a1b2e6dc31201f2d37a0\
    58f03c39c06c200824705685ceca003c95140434ee9d8bbbf4474b83fd4ecc2766137db9a44d7420b7b9e52f3ee8ce4f\
    bb8be7d6cf66d33a20293f806c69385136662a74453fb162201732c9a35e80d4796babea76aace50b49f6079ea3e349f\
    026b4491cfe720ad17202d9b57e92ab51fe28a587050fd82abb30abd699a5ce8b54e7cd49b2a827bcb9920dcba229acd\
    c6b7f028ba756fd5abbfebd31b4227cd4137d728ec5ea56c457618202cf1439a6dbcc1a35e96574bddbf2c5db9174af5\
    ad0d278fe92e06e4ac349a42500000c02000000000000000000014297d038cb54bfa964b44fb9a2d9853eb5936d4094f\
    13a5e4a299b6c0cbdac21e997d74a999c26acd68c34bdfb527b10ddd779a1a0bceb3919b5c6c1f2c1773703bc0010350\
    000080200000000000000000000d5efbd7dc73f09e8aaf064d1a76142d4bac4e9dcc61fc255eefbc6d8670ee98c583ae\
    ed677f27fc239c41f93ee411add001b1d40815a3268b9b5c6c1f2c17e11874af50000040200000000000000000001353\
    5112250e115e2896e4f602c353d839443080398e3f1dfb5f1e89109ef8508bde5404cf244a6372f402e0cf9d8dbd8183\
    26222ca739e08d9b5c6c1f2c1744290a9250000000200000000000000000002274473227b7674bd6a5b17dd3316a827f\
    5a34402ea4ba2b36128b600bbb488ec6595eb2bb808425dea85fb83a63267b643406bed63aa310919b5c6c1f2c1749c4\
    d1f0473045022100f4dce45edcc6bfc4a1f44ef04e47e90a348efd471f742f18b882ac77a8d0e89e0220617cf7c4a222\
    11991687b17126c1bb007a3b2a25c550f75d66b857a8fd9d75e7583056301006072a8648ce3d020106052b8104000a03\
    420004b3c10470c8e8e426f1937758d9fb5e97a1891176cb37d4c12d4af4107b1aa3e8a8a754c06a22760e44c60642fb\
    a883967c19740d5231336326f7962750c8df990400000000040000000d202a014e88ed7ab65cdfaa85daeab07eea6cba\
    5e147f736edd8d02c2f9ddf0dec60400000006205b977ea09a554ad56957f662284044e7d37450ddadf7db3647712f59\
    693997872020d0a3d873eeeee6a222a75316dce60b53ca43eaea09d27f0ece897303a53ae920c06fe913dca5dc273656\
    3b80834d69e6dfdf1b1e92383ea62791e410421b6c1120049f68d350eeb8b3df630c8308b5c8c2ba4cd6210868395b08\
    4af84d19ff0e902000000000000000000000000000000000000000000000000000000000000000002036252dfc621de4\
    20fb083ad9d8767cba627eddeec64e421e9576cee21297dd0a41000013880002449c60619294546ad825af03b0935637\
    860679ddd55ee4fd21082e18686e26bbfda7d5e4462ef24ae02d67e47d785c9b90f30101000000000000010101000000\
    0101580101166772f51ab208d32771ab1506970eeb664462730b838e0203e800010701370100010c6865616465722062\
    797465730112636f6e7465787420696e666f20627974657301117061796f757420696e666f2062797465734630440220\
    398b74708dc8f8aee68fce0c47b8959e6fce6354665da3ed87a83f708e62aa6b02202e6c00c00487763c55e92c7b8e1d\
    d538b7375d8df2b2117e75acbb9db7deb3c7583056301006072a8648ce3d020106052b8104000a03420004de4ee8300c\
    3cd99e913536cf53c4add179f048f8fe90e5adf3ed19668dd1dbf6c2d8e692b1d36eac7187950620a28838da60a8c9dd\
    60190c14c59b82cb90319e04000000010400000000201fec8aa4983d69395010e4d18cd8b943749d5b4f575e88a375de\
    bdc5ed22531c040000000220000000000000000000000000000000000000000000000000000000000000000020000000\
    000000000000000000000000000000000000000000000000000000000041000013880002449c60619294546ad825af03\
    b0935637860679ddd55ee4fd21082e18686e26bbfda7d5e4462ef24ae02d67e47d785c9b90f3010100000000000001";
/// Bootstrap Bitcoin block index with six refs
pub const BTC_BLOCK_INDEX: &str = "000030390000002000000000000000b345b7bbf29bda1507a679b97967f99a10ab0088899529def75e16e6cef738a2eb\
    a1fe7409318e3f558bec325392427aa3d8eaf46b028654f82213b75c841a011a2e00f29a0000001001060000007b0000\
    0084000000d5000000e70000014100000138";
/// Regtest Bitcoin block index marked failed-pop and failed-child
pub const BTC_BLOCK_INDEX_FAILED: &str = "000000010100000006226e46111a0b59caaf126043eb5bbf28c34f3a5e332a1fc7b2b73cf188910fa1dba9aa0a3ef1ea\
    db813f49d8910589eda0d01213d0e469da78301da0f72d8a8b848c5fffff7f2000000000000000c0010100000043";
/// VeriBlock block index with one endorsement and one VTB id
pub const VBK_BLOCK_INDEX: &str = "00003039000013880002449c60619294546ad825af03b0935637860679ddd55ee4fd21082e18686e26bbfda7d5e4462e\
    f24ae02d67e47d785c9b90f30101000000000000010000001000003085010120f7de2995898800ab109af96779b979a6\
    0715da9bf2bbb745b30000000000000018f85486026bf4ead8a37a42925332ec8b553f8e310974fea118f85486026bf4\
    ead8a37a42925332ec8b553f8e310974fea120f85486026bf4ead8a37a42925332ec8b553f8e310974fea1eba238f7ce\
    e6165e010120f7de2995898800ab109af96779b979a60715da9bf2bbb745b300000000000000";
/// Altchain block index with two endorsements and 177 context block ids
pub const ALT_BLOCK_INDEX: &str = "0000000b20f33544a7391f71e6ca8889d1a058aabf76597f7bc481142303bac42530a7e22320954db438edd1e31e5387\
    192fe18c9c2bfcad9fac23699fcedec4ea8cccd515620000000b0000000b00000160010220ff4b2bb098832cee9012c2\
    f2a2e7e19739671b03196e7c2bfeb2ccc32d37ca8520f4d19d5cd16e5db73260621837d87936b2c896bfb55c9c83eacd\
    edff663c315a20f33544a7391f71e6ca8889d1a058aabf76597f7bc481142303bac42530a7e22318fe62c7297188f4bc\
    bf77ca1777fab998b52075256b16d39d208e7ef17fbf4f8491ee7d31f9492be0f564e840d1c5150f39977f45ce3195b6\
    e720f4d19d5cd16e5db73260621837d87936b2c896bfb55c9c83eacdedff663c315a20f33544a7391f71e6ca8889d1a0\
    58aabf76597f7bc481142303bac42530a7e2231833dd49499e43de8da4c9b11190c806f6556ec8aae7a67b9f0102208e\
    7ef17fbf4f8491ee7d31f9492be0f564e840d1c5150f39977f45ce3195b6e720ff4b2bb098832cee9012c2f2a2e7e197\
    39671b03196e7c2bfeb2ccc32d37ca8501022087c0eebb4d87807651bda3d342514b1eeb1109afb50afd98fb2e40347b\
    ff9d352075af5036ff145a7e67c9045da90eb157f321f7148de37a8965e95beb3de51ab101b10ce1f7df9d006885f2ed\
    009f8c0cc5fcfb31a7a1b798753cfee10c1bc9711cb789f21853f8d5fc0c2d07d5fe49058ae768b7e4190c58c901d5a4\
    8f92bb1bacc3ae0c9e077ad12b5e4fde48416bca0cc2573b1e07378eace3d5219f0c094b4378181da3520897ad4a0c10\
    0fad5846f4d6310f5433030c41a047a66e8ff4b46dd555a20c4f39981ddf8ddc454e5cb2120cd1bc0cec99598a413f6a\
    44750c3e195b84ff821471918495890c7b1b51eb76b285e17fdbbe480c4aebe7e439345cbb030d54f40c0ffe8bbc41de\
    67b6119b393c0ce6835247047b43721d032a450c8c69f3e4e6d6153dd438fb660ce8ddb689d933e72b8fb59d7a0c168c\
    3007f44ddafdcb63ff210c270a016e2a8b53fd474a46720ccdc9a18b8c37075caa81e65c0c80b5cde420d74bf7f7dbef\
    790c9eb17936a979bc34d8f1a4cf0c7e2ccae9f3cd9594b5ec30070c6bcbcc3ca1e46b942592928c0c777e97f9e7756c\
    c81962b3af0c796fe502779b98aa0204bb020c73777044dd94b6fa245213bd0cb6d6fffa242f31578abf4e420cd4efac\
    28f12a383bdef5f52d0cbce7b522b92006055288b9880c6c8641229c15bb6c40080e630c67b8d065a0d80b23492f7e77\
    0cf7684286a361ad37ca2d72b10c66ead710ff54e0b248d534690cd83303babdbf2309a8828f070cb5797a4fc367346a\
    b10ec3740ca61f35e9e9ba8fe1129997fe0c551d2aa767f180c4c118958b0c90bbc736ba5f3682c54b22a90cf8bbc783\
    e5d7e104db82875a0c0526d4aa98a54c70dd9e58ae0c34c16c196f1a3ff7c90091000c953ab89d6f55871bd4d37ea60c\
    e172a1820f98eceed03974300c8c384c889bb2610d9d6c4de10cb813a279ebf5e50f0a1f169a0c63b67b38269ff18e42\
    c29e530cf6fa29a6970777c74ade42950c8132dc2baa332139d470ad610c3b70e554a3bee63b611d41ed0c3c18083ac5\
    bc37618c97355a0cd74e975a1b33cbd961779b4b0ce61f31a92d1312c921d316570c00854a196b561ac13415c2df0cb9\
    c9c0cebad80799325fe2950c347b8c9103037cf25e86e59e0cc8a27af6fb93b40097b2d3580c6412c502508210a3c4e2\
    cf370c57a383d6511708604de3d0e60c9b21f6ee14813911164817080c4b94b0496f47d4d7dbdd7b3f0c9b841763fed7\
    b81511a594250ce0d1515db2a43989ba9dd01d0cd0da61b1acf23b7f17f115f00ce5e9b60054251fd567ff62d60c5d8d\
    2f2fad4a9da69bf5477c0c38a11d5010203383989aecbf0c7369b3ce5653b3ed032ea7130c018d46d72f573a2a452453\
    690c76f7f636d1a4b437bb46af9d0c5134f373f9c0703fe730e25d0c918d1d07e2f5affcfeb98a3f0c5f090b31a47292\
    f87f2601020c9a455e963794a9085f8fcba00c3547ccc625ceb4877bcc9d2a0c14b7dc40ebd7be5ab71284f70c26711e\
    267471be65cb8f8ee70c33effe020126d9238076e8ea0c12c68fdd55d2a7720ac706160c96ed15a6e2c4bf5fc9f0bf3f\
    0c6a00847999a127fcf65bf27a0ca349f0473347f5ebc8116e380c4a7b3e068dafc3a7299721df0c90be4661fa2aa1cf\
    a69b94c10ccadd9a28d641e7e54b8a4c0d0c970ad0c76ffde5f689f26f740ce35e3d736060b132b91c53410c5c055903\
    00fe08dedc8cdc3a0c249e2f1f21f0dcf7b9f5e7720ca3b275dc16b73ab3a51139e10cd71138292abe4b46215199b30c\
    b455100856151d95a71b01db0c000f675bdd49245db883c9470c14ef92b93400d160195b7ebc0c2d9e1cd8fcb4fe4425\
    e194350c31cd3bee81336a8460fc701b0c0c996c150694f010e79a00630c3a733766c115eba2c14c31270ce41b6fc2df\
    143d8ebe8924f50ce1c3ef725f35900a6fb4df680c914527ec8f99988c58db59b50ce470213a74d9bf786a313c3b0cc6\
    6d3667e90fd538e590af940cfb3e8c9447cb4327aeb554960c1339769f1b3ab84b5c07babd0c04bd9249ef48abda0132\
    12710c1058114ee781476f30153c870cf5720eb3914e43f44da9cd730cda08d866299d88609357807d0c607e2190f2b9\
    a93b882b33ff0c7c7df87da69f9cde5b24ae870c343a620406bbb8c71e23536a0cbe2a8ed83a7d939c81ac67240c0416\
    5e2796372894054ef0740c4e6ef95ad74529b66837ef790c00e696707bbd61ce51469e830c313ec49a2fd6009f39cde7\
    340caf1558aac10a2cc8de182b0c0c90c806f6556ec8aae7a67b9f0ce8ec0c148d94d9c2cf6c57130cddbfa9c42ad983\
    ea9228a2150cfef9f6fb7a432148f35949eb0cba3da9d36c2ee97f14967ca40c8d576353e629da13224acf700c6eacbe\
    58e2d7a82da54bcd0c0c5b1293420ddca97ae35629ba0c499bd650836b3714e550173b0c4879ca38375e29bd6cb15b61\
    0ceb631f11ecc94025654245d30cdab0bd8388f5780b7681fd1c0cce8649df5b536457a8fd623b0c2cf5dd129f33aab2\
    30fb66350c0355b041d34426579f6d6cdf0cc7475f63472ceb8c306476480c04649597806078925eb238f70ccc2e6d34\
    a8221eb558f060bf0c9c7f894f90950608d3c970e40c43f8856d22eb917608ae93c10c141765e651d41d3321387ce30c\
    cc12d2e2672003a18a3263340c5e048b8cc185ab51a506b38b0c3b8be41b0f55a2a3c6e8231f0c6339a37df7b6bf4396\
    1220c00c32a0de4ab782a02f10406e210c46604bdd5ee9b75bb411756f0c148dd0aed3e01c0416a45ba90c5c39a8a089\
    70cae1e01612140cfc48265850caee4c90f8631e0c104098fa942c72e6bf4877c90c0eca21e6407b73e3d5a35b360c01\
    f0c4e806972ed86ad14c5b0c55eb3472d3e5939f2b4be7a80ca84a66c27ca40d6bbb94b9ec0ca9c42fac7f3f2d46c632\
    d8540cb6acfe5812f28d6bdcad26550c6dfe3ed16543fde3fbf2390b0cf902e534669896c27f6a32400cb4aa8d6d364a\
    7178b9554f0c0c73a0ec75bb7071168be11b650c0cecb0d24c618c2e9ab562280c7508a25b10fdddec28e7e5550cd4d5\
    b84b3d7aa1d23af8d4b80cee98dc166014267af2f138b90caadb75d72ea1190da751480d0c0e20b89e85fe958d408ebc\
    840c0f0d42c5bb6c6bf1e4888a8d0c51ae2db1fcff6a8f0d46334c0c3646679a78ca9557617b37340c60f254543d2814\
    429bd924d20c33e5fb95adab23dfbd0fb5ee0cdcf64eeeeba67012d95dc9710ce953b19d9e5ae3e3bb9916e00c0c15dc\
    adddcf07cd3dfc1f8e0c291779d36b19b82d137adc490c77fab998b52075256b16d39d";

pub fn bytes(fixture: &str) -> Vec<u8> {
    hex::decode(fixture).expect("fixture is valid hex")
}

pub fn config() -> CodecConfig {
    CodecConfig::default()
}

pub fn decode<T: VbkDecode>(fixture: &str) -> T {
    decode_exact(&bytes(fixture), &config()).expect("fixture decodes")
}
